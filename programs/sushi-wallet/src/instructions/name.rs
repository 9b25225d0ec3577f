use anchor_lang::prelude::*;
use crate::constants::WALLET_NAME;

pub fn handler(_ctx: Context<Name>) -> Result<String> {
    Ok(WALLET_NAME.to_string())
}

#[derive(Accounts)]
pub struct Name {}
