//! Prints the Sinew Strength document under both color schemes.
//!
//! Set `RUST_LOG=sinew_style=trace` to watch each style list being merged.
//!
//! Run with: cargo run -p sinew-screen --example print_document

use sinew_screen::prelude::*;
use sinew_screen::tree::TreeFormatOptions;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("Sinew Strength document");
    println!("=======================");

    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        let host = DefaultHost::new(FixedScheme(scheme));
        let rendered =
            sinew_screen::build_document_with(&host).expect("built-in document should render");

        println!();
        println!(
            "{scheme} scheme (status bar: {:?}, background: {})",
            rendered.chrome.status_bar,
            rendered.chrome.background.to_hex()
        );
        println!();
        print!("{}", rendered.to_tree_string(TreeFormatOptions::detailed()));
    }
}
