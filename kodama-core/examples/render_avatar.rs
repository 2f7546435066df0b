//! Render one avatar to stdout.
//!
//! ```sh
//! cargo run -p kodama-core --example render_avatar -- alice
//! ```

use kodama::{Options, create_faces};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "alice".to_string());
    let result = create_faces(&Options::new(&name).size(96))?;

    eprintln!(
        "name={name} eyes={:?} mouth={:?} gradient={}..{}",
        result.slots.eyes, result.slots.mouth, result.gradient.from, result.gradient.to
    );
    println!("{}", result.svg);
    Ok(())
}
