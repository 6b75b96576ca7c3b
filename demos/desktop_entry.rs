//! Builds a fresh `.desktop` file with a fixed line order.
//!
//! ```bash
//! cargo run --example desktop_entry -- .png image/png image/apng
//! ```

use xdgini::{Configuration, Entry, Group};

fn desktop_entry(extension: &str, mime_types: &[String]) -> Configuration {
    Configuration::new().with_group(
        "Desktop Entry",
        Group::with_order(1)
            .with_entry("Type", Entry::with_order("Application", 1))
            .with_entry("Version", Entry::with_order(xdgini::VERSION, 2))
            .with_entry("Name", Entry::with_order(format!("Open Proxy ({})", extension), 3))
            .with_entry("NoDisplay", Entry::with_order("true", 4))
            .with_entry(
                "Exec",
                Entry::with_order(format!("open-proxy --ext {} %f", extension), 5),
            )
            .with_entry("MimeType", Entry::with_order(mime_types.join(";"), 6)),
    )
}

fn main() {
    let mut args = std::env::args().skip(1);
    let extension = args.next().unwrap_or_else(|| ".png".to_string());
    let mut mime_types: Vec<String> = args.collect();
    if mime_types.is_empty() {
        mime_types.push("image/png".to_string());
    }

    let entry = desktop_entry(&extension, &mime_types);
    let file_name = format!("open-proxy-{}.desktop", extension.trim_start_matches('.'));

    println!("# {}", file_name);
    print!("{}", entry);
}
