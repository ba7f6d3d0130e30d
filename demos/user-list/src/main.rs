//! User list demo
//!
//! Fetches a JSON array of users and prints the ones that decode.
//!
//! ```text
//! user-list [URL]
//! RUST_LOG=loadparse=debug user-list https://example.com/users.json
//! ```
//!
//! Errors are described in Portuguese when `LANG` starts with `pt`.

// Example-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use std::process::ExitCode;

use loadparse::{Error, Fetcher, HttpClient, Locale, User};
use tracing_subscriber::EnvFilter;

const DEFAULT_URL: &str = "https://gist.githubusercontent.com/dbonates/4bf4017dd770ccb1e680/raw/2590c37fc16294dbbc7c052d123295b76a707670/user_data_demo.json";

fn locale_from(lang: Option<&str>) -> Locale {
    match lang {
        Some(lang) if lang.starts_with("pt") => Locale::Portuguese,
        _ => Locale::English,
    }
}

fn render(user: &User) -> String {
    let avatar = user
        .avatar_url()
        .map_or_else(|_| format!("{} (not a URL)", user.avatar()), String::from);
    format!("#{:<6} {:<30} {avatar}", user.id(), user.full_name())
}

async fn run<C: HttpClient>(fetcher: &Fetcher<C>, url: &str) -> Result<Vec<String>, Error> {
    let users = fetcher.fetch_users(url).await?;
    Ok(users.iter().map(render).collect())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let url = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_URL.to_string());
    let locale = locale_from(std::env::var("LANG").ok().as_deref());

    tracing::debug!(%url, ?locale, "starting");
    let fetcher = Fetcher::new(loadparse::HyperClient::builder().with_logging().build());
    match run(&fetcher, &url).await {
        Ok(lines) => {
            for line in &lines {
                println!("{line}");
            }
            println!("{} user(s)", lines.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err.describe(locale));
            ExitCode::FAILURE
        }
    }
}
