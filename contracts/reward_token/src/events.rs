use soroban_sdk::{contractevent, Address, Env, String, Symbol};

#[contractevent(topics = ["BltzToken", "CREATED"])]
struct Created {
    issuer: Address,
    symbol: Symbol,
    max_supply: i128,
}

#[contractevent(topics = ["BltzToken", "ISSUED"])]
struct Issued {
    to: Address,
    quantity: i128,
    memo: String,
}

#[contractevent(topics = ["BltzToken", "TRANSFER"])]
struct Transferred {
    from: Address,
    to: Address,
    quantity: i128,
    memo: String,
}

#[contractevent(topics = ["BltzToken", "BURNED"])]
struct Burned {
    owner: Address,
    quantity: i128,
}

pub fn emit_created(env: &Env, issuer: &Address, symbol: &Symbol, max_supply: i128) {
    Created {
        issuer: issuer.clone(),
        symbol: symbol.clone(),
        max_supply,
    }
    .publish(env);
}

pub fn emit_issued(env: &Env, to: &Address, quantity: i128, memo: &String) {
    Issued {
        to: to.clone(),
        quantity,
        memo: memo.clone(),
    }
    .publish(env);
}

pub fn emit_transferred(env: &Env, from: &Address, to: &Address, quantity: i128, memo: &String) {
    Transferred {
        from: from.clone(),
        to: to.clone(),
        quantity,
        memo: memo.clone(),
    }
    .publish(env);
}

pub fn emit_burned(env: &Env, owner: &Address, quantity: i128) {
    Burned {
        owner: owner.clone(),
        quantity,
    }
    .publish(env);
}
