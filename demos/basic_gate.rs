//! Basic gate evaluation example.
//!
//! This example mints a session token the way the login endpoint does,
//! then shows the three possible decisions for inbound requests.
//!
//! # Running
//!
//! ```bash
//! export FORTRESS_SECRET="change-me"
//! cargo run --example basic_gate
//! ```

use fortress_gate::token::codec::encode;
use fortress_gate::token::mac::compute_code;
use fortress_gate::{Clock, Decision, GateConfig, RequestDescriptor, SessionGate, SystemClock};

fn main() {
    // The shared secret comes from deployment configuration. An unset
    // secret is a hard error: the gate refuses to start rather than
    // falling back to a guessable default.
    let config = match GateConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    let secret = config.secret.clone();

    let gate = match SessionGate::new(config) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // What the login endpoint would set as the fortress_auth cookie.
    let now = SystemClock.now_unix();
    let token = encode(now, &compute_code(now, &secret));

    let requests = [
        RequestDescriptor::new("GET", "https", "console.example.com", "/login"),
        RequestDescriptor::new("GET", "https", "console.example.com", "/dashboard"),
        RequestDescriptor::new("GET", "https", "console.example.com", "/api/blocklist"),
        RequestDescriptor::new("GET", "https", "console.example.com", "/dashboard")
            .with_header("Cookie", format!("fortress_auth={}", token)),
    ];

    for request in &requests {
        match gate.evaluate(request) {
            Decision::Pass => println!("{:40} -> pass", request.path),
            Decision::Redirect { location } => {
                println!("{:40} -> redirect {}", request.path, location)
            }
            Decision::Reject { status, body } => {
                println!("{:40} -> {} {}", request.path, status, body)
            }
        }
    }
}
