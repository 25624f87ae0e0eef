use throwless::prelude::*;

#[derive(Debug)]
enum ConfigError {
    Missing(&'static str),
    Invalid(String),
}

fn read_port(raw: Option<&'static str>) -> Outcome<u16, ConfigError> {
    match raw {
        None => Failure(ConfigError::Missing("port")),
        Some(text) => {
            outcome!(text.parse::<u16>()).map_err(|e| ConfigError::Invalid(e.to_string()))
        }
    }
}

fn validate_port(port: u16) -> Outcome<u16, ConfigError> {
    if port >= 1024 {
        Success(port)
    } else {
        Failure(ConfigError::Invalid(format!("port {} is privileged", port)))
    }
}

fn main() {
    println!("Running Quick Start examples...");

    for raw in [Some("8080"), Some("80"), Some("http"), None] {
        let port = read_port(raw)
            .and_then(validate_port)
            .inspect(|p| println!("  accepted port {}", p))
            .inspect_err(|e| println!("  rejected {:?}: {:?}", raw, e))
            .unwrap_or(8080);
        println!("  -> using {}", port);
    }

    let description = read_port(Some("443")).match_with(
        |p| format!("configured on {}", p),
        |e| format!("falling back because {:?}", e),
    );
    println!("{}", description);

    match read_port(None).try_expect("port must be configured") {
        Ok(port) => println!("port {}", port),
        Err(err) => println!("unwrap failed: {}", err),
    }
}
