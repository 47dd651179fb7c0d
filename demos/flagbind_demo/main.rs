//! # flagbind demo application
//!
//! A sample CLI tool that showcases how to integrate
//! [flagbind](https://docs.rs/flagbind) into a real application. This is
//! **not** a real server — it binds a configuration struct, parses the
//! command line, and prints the resolved values.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example flagbind_demo -- --api-key secret
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature              | How to exercise it                                              |
//! |----------------------|------------------------------------------------------------------|
//! | Compiled defaults    | `cargo run --example flagbind_demo -- --api-key k`              |
//! | Explicit flag        | `... -- --api-key k --port 3000`                                |
//! | Bool flag            | `... -- --api-key k --verbose`                                  |
//! | Duration value       | `... -- --api-key k --request-timeout 1m30s`                    |
//! | List value           | `... -- --api-key k --allowed-origins a.com,b.com`              |
//! | Env var override     | `ACF_PORT=9090 cargo run --example flagbind_demo -- --api-key k`|
//! | Nested env var       | `ACF_DATABASE_POOL_SIZE=32 ... -- --api-key k`                  |
//! | Custom env prefix    | `PREFIX_ACF=DEMO_ DEMO_PORT=9090 ... -- --api-key k`            |
//! | Flag name override   | `... -- --api-key k --db-url postgres://db/prod`                |
//! | Required flag        | run without `--api-key` and watch the parse error               |
//! | Group gating         | edit `ACTIVE_GROUPS` below to include `"admin"`                 |

mod config;

use flagbind::{Binder, ClapSet};

use config::DemoConfig;

/// Groups enabled for this binary. Add `"admin"` to surface `--admin-token`.
const ACTIVE_GROUPS: &[&str] = &[];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flagbind=info".into()),
        )
        .init();

    let mut config = DemoConfig::default();
    let mut set = ClapSet::new("flagbind-demo");
    let binder = Binder::new();

    let report = binder.bind(&mut set, &mut config, ACTIVE_GROUPS);
    for diagnostic in &report.diagnostics {
        eprintln!("warning: {diagnostic}");
    }

    if let Err(error) = set.try_parse_from(std::env::args()) {
        error.exit();
    }
    binder.apply(&set, &mut config, ACTIVE_GROUPS);

    println!("resolved configuration:");
    println!("  host             = {}", config.host);
    println!("  port             = {}", config.port);
    println!("  verbose          = {}", config.verbose);
    println!("  request_timeout  = {:?}", config.request_timeout);
    println!("  allowed_origins  = {:?}", config.allowed_origins);
    println!("  labels           = {:?}", config.labels);
    println!("  api_key          = {}", config.api_key);
    if !config.admin_token.is_empty() {
        println!("  admin_token      = {}", config.admin_token);
    }
    println!("  database.url     = {}", config.database.url);
    println!("  database.pool    = {}", config.database.pool_size);
}
