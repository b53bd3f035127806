// Primitive operations of the engine, grouped the way they dispatch:
// each operator file holds the forward constructor(s) and the
// local-derivative rule the backward dispatcher applies.

pub mod activation;
pub mod arithmetic;
