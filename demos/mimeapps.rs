//! Registers default applications in a mimeapps.list and shows what would change.
//!
//! ```bash
//! cargo run --example mimeapps -- ~/.config/mimeapps.list
//! RUST_LOG=xdgini=debug cargo run --example mimeapps
//! ```
//!
//! The file is only read; the updated text is printed to stdout.

use tracing_subscriber::EnvFilter;

const SAMPLE: &str = "\
# Default applications
[Default Applications]
text/html=firefox.desktop
image/png=eog.desktop

[Added Associations]
image/png=eog.desktop;gimp.desktop;
";

const ASSOCIATIONS: &[(&str, &str)] = &[
    ("image/png", "viewer-png.desktop"),
    ("image/apng", "viewer-png.desktop"),
    ("image/jpeg", "viewer-jpg.desktop"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let original = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(err) => return Err(err.into()),
        },
        None => SAMPLE.to_string(),
    };

    let mut config = xdgini::parse(&original);
    let defaults = config.get_or_create_group("Default Applications");
    for (mime_type, desktop_file) in ASSOCIATIONS {
        defaults
            .get_or_create_entry(mime_type, desktop_file)
            .set_value(*desktop_file);
    }

    let updated = config.render();
    if updated == original {
        eprintln!("No changes needed");
        return Ok(());
    }

    eprintln!("Changed lines:");
    let before: Vec<&str> = original.lines().collect();
    for line in updated.lines().filter(|line| !before.contains(line)) {
        eprintln!("+ {}", line);
    }

    print!("{}", updated);
    Ok(())
}
