//! Seed data the example contracts are deployed with
use evm_por_address_list::EvmAddress;
use soroban_sdk::{BytesN, Env, String as SorobanString, Vec};

pub const SAMPLE_ADDRESSES: [&str; 10] = [
    "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
    "0x70997970c51812dc3a010c7d01b50e0d17dc79c8",
    "0x3c44cdddb6a900fa2b585dd299e03d12fa4293bc",
    "0x90f79bf6eb2c4f870365e785982e1f101e93b906",
    "0x15d34aaf54267db7d7c367839aaf71a00a2c6a65",
    "0x9965507d1a55bcc2695c58ba16fb37d819b0a4dc",
    "0x976ea74026e726554db657fa54763abd0c3a0aa9",
    "0x14dc79964da2c08b23698b3d3cc7ca32193d9955",
    "0x23618e81e3f5cdf7f54c3d65f7fbc0abf5b21e8f",
    "0xa0ee7a142d267c1f36714e4a8f75612f20a79720",
];

pub const EXAMPLE_STRING_ADDRESSES: [&str; 10] = [
    "addr.one",
    "addr.two",
    "addr.three",
    "addr.four",
    "addr.five",
    "addr.six",
    "addr.seven",
    "addr.eight",
    "addr.nine",
    "addr.ten",
];

/// Parses a `0x`-prefixed hex EVM address.
pub fn parse_evm_address(env: &Env, hex_str: &str) -> Result<EvmAddress, hex::FromHexError> {
    let mut raw = [0u8; 20];
    hex::decode_to_slice(hex_str.trim_start_matches("0x"), &mut raw)?;
    Ok(BytesN::from_array(env, &raw))
}

/// Renders an EVM address back into lowercase `0x` hex.
pub fn format_evm_address(address: &EvmAddress) -> std::string::String {
    format!("0x{}", hex::encode(address.to_array()))
}

pub fn sample_evm_addresses(env: &Env) -> Result<Vec<EvmAddress>, hex::FromHexError> {
    let mut addresses = Vec::new(env);
    for addr in SAMPLE_ADDRESSES.iter() {
        addresses.push_back(parse_evm_address(env, addr)?);
    }
    Ok(addresses)
}

pub fn sample_string_addresses(env: &Env) -> Vec<SorobanString> {
    let mut addresses = Vec::new(env);
    for addr in EXAMPLE_STRING_ADDRESSES.iter() {
        addresses.push_back(SorobanString::from_str(env, addr));
    }
    addresses
}

/// Whole tokens in 18-decimal base units.
pub fn token_units(amount: i128) -> i128 {
    amount * 10i128.pow(token_with_por::TOKEN_DECIMALS)
}

/// Whole reserve units at `decimals` feed precision.
pub fn feed_units(amount: i128, decimals: u32) -> i128 {
    amount * 10i128.pow(decimals)
}
