//! Command line and environment configuration.

use crate::session::Passwords;
use clap::Parser;
use rocket::data::{Limits, ToByteUnit};
use rocket::figment::Figment;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Postgres connection string (falls back to DATABASE_URL from .env)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Shared password for quiz players
    #[arg(long, default_value = "seto", env = "QUIZ_PASSWORD")]
    pub user_password: String,

    /// Shared password for the admin pages
    #[arg(long, default_value = "seto-admin", env = "QUIZ_ADMIN_PASSWORD")]
    pub admin_password: String,

    /// Keep photos in memory instead of Postgres (lost on exit)
    #[arg(long, env = "QUIZ_MEMORY_STORE")]
    pub memory_store: bool,

    /// Largest accepted upload, in MiB
    #[arg(long, default_value_t = 16, env = "QUIZ_UPLOAD_LIMIT_MIB")]
    pub upload_limit_mib: u64,
}

impl Cli {
    pub fn passwords(&self) -> Passwords {
        Passwords::new(&self.user_password, &self.admin_password)
    }

    /// Rocket's figment (Rocket.toml and ROCKET_* variables) with upload limits applied.
    pub fn figment(&self) -> Figment {
        upload_figment(rocket::Config::figment(), self.upload_limit_mib)
    }
}

pub fn upload_figment(figment: Figment, upload_limit_mib: u64) -> Figment {
    let limit = upload_limit_mib.mebibytes();
    figment.merge((
        "limits",
        Limits::default()
            .limit("file", limit)
            .limit("data-form", limit),
    ))
}
