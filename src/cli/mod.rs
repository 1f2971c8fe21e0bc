//! 의사 포털 CLI
//!
//! 브라우저 대신 터미널에서 의사 로그인/회원가입 흐름을 실행합니다.
//!
//! ```text
//! nabhacare_portal signin --credential <GOOGLE_ID_TOKEN>
//! nabhacare_portal config
//! nabhacare_portal logout
//! ```

pub mod commands;
pub mod prompt;
pub mod registration_form;

use clap::{Parser, Subcommand};

/// NabhaCare doctor portal sign-in client
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in with a Google ID token, registering a doctor account if needed
    Signin {
        /// Google ID token (JWT) returned by the sign-in widget
        #[arg(long, env = "GOOGLE_CREDENTIAL")]
        credential: Option<String>,
    },
    /// Print the resolved API base URL, credential store and database target
    Config,
    /// Remove stored session tokens
    Logout,
}
