//! Routing a document between formats through chained converters
//!
//! This example registers three point-to-point converters and shows the
//! registry resolving requests they cover directly, requests that need a
//! chain, and requests no chain can satisfy.

use convroute::{ConversionRegistry, FnConverter};

fn main() {
    let mut registry = build_registry();

    println!("\n=== Registered Formats ===\n");
    for format in registry.formats() {
        println!("- {format}");
    }

    let document = "# Conversion Routing\nChains are resolved on demand.";

    println!("\n=== Direct Conversion (markdown -> html) ===\n");
    if let Ok(html) = registry.convert(document.to_string(), "markdown", "html") {
        println!("{html}");
    }

    println!("\n=== Chained Conversion (markdown -> stats) ===\n");
    // No markdown -> stats converter exists; the registry routes the value
    // through html and text.
    if let Ok(stats) = registry.convert(document.to_string(), "markdown", "stats") {
        println!("{stats}");
    }

    println!("\n=== Route Inspection ===\n");
    if let Ok(Some(chain)) = registry.find_chain("markdown", "stats") {
        println!("Route: {chain}");
        for (hop, step) in chain.steps().iter().enumerate() {
            println!("  hop {}: {} -> {}", hop + 1, step.input, step.output);
        }
    }

    println!("\n=== Unsupported Request (markdown -> pdf) ===\n");
    match registry.convert(document.to_string(), "markdown", "pdf") {
        Ok(_) => println!("unexpectedly succeeded"),
        Err(err) => println!("{err}"),
    }
}

fn build_registry() -> ConversionRegistry<String> {
    let mut registry = ConversionRegistry::new();

    registry.register(FnConverter::new("markdown", "html", |v: String| {
        let mut html = String::new();
        for line in v.lines() {
            if let Some(heading) = line.strip_prefix("# ") {
                html.push_str(&format!("<h1>{heading}</h1>\n"));
            } else {
                html.push_str(&format!("<p>{line}</p>\n"));
            }
        }
        Ok(html)
    }));

    registry.register(FnConverter::new("html", "text", |v: String| {
        let mut text = String::new();
        let mut in_tag = false;
        for c in v.chars() {
            match c {
                '<' => in_tag = true,
                '>' => {
                    in_tag = false;
                    text.push(' ');
                }
                _ if !in_tag => text.push(c),
                _ => {}
            }
        }
        Ok(text)
    }));

    registry.register(FnConverter::new("text", "stats", |v: String| {
        let words = v.split_whitespace().count();
        let lines = v.lines().count();
        Ok(format!("{words} words across {lines} lines"))
    }));

    registry
}
