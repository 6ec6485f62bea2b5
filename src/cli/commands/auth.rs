use anyhow::Context;
use clap::Args;
use serde_json::json;

use crate::auth::JwtKeys;
use crate::cli::{utils, OutputFormat};
use crate::config;
use crate::types::Role;

#[derive(Args)]
pub struct TokenArgs {
    #[arg(help = "Email the token identifies")]
    pub email: String,

    #[arg(long, help = "Grant the ADMIN role in addition to USER")]
    pub admin: bool,
}

impl TokenArgs {
    fn roles(&self) -> Vec<Role> {
        if self.admin {
            vec![Role::User, Role::Admin]
        } else {
            vec![Role::User]
        }
    }
}

pub fn handle(args: TokenArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let security = &config::config().security;
    let keys = JwtKeys::from_config(security).context("JWT_SECRET must be set to mint tokens")?;
    let roles = args.roles();
    let token = keys.issue(&args.email, roles.clone())?;

    match output_format {
        OutputFormat::Text => println!("{}", token),
        OutputFormat::Json => utils::output_success(
            output_format,
            "Token issued",
            Some(json!({
                "email": args.email,
                "roles": roles,
                "expires_in_hours": security.jwt_expiry_hours,
                "token": token,
            })),
        )?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_flag_adds_admin_role() {
        let args = TokenArgs {
            email: "admin@ucsb.edu".to_string(),
            admin: true,
        };
        assert_eq!(args.roles(), vec![Role::User, Role::Admin]);

        let args = TokenArgs {
            email: "user@ucsb.edu".to_string(),
            admin: false,
        };
        assert_eq!(args.roles(), vec![Role::User]);
    }
}
