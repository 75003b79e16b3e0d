// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs parses arguments, loads the
// dataset and dispatches to these handlers.

pub mod cities;
pub mod compare;
pub mod route;
pub mod scenarios;

use capitals_lib::Error as LibError;

/// Convert library errors into user-facing messages.
pub(crate) fn friendly_error(err: LibError) -> anyhow::Error {
    match err {
        LibError::UnknownCity { name, suggestions } => {
            anyhow::anyhow!(format_unknown_city_message(&name, &suggestions))
        }
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_city_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown city '{}'.", name);
    match suggestions {
        [] => message.push_str(" Run the `cities` command to list known capitals."),
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_suggestion_is_quoted() {
        let message = format_unknown_city_message("Sao Paulo", &["São Paulo".to_string()]);
        assert_eq!(message, "Unknown city 'Sao Paulo'. Did you mean 'São Paulo'?");
    }

    #[test]
    fn several_suggestions_are_listed() {
        let message = format_unknown_city_message(
            "Rio",
            &["Rio Branco".to_string(), "Rio de Janeiro".to_string()],
        );
        assert!(message.ends_with("Did you mean one of: 'Rio Branco', 'Rio de Janeiro'?"));
    }

    #[test]
    fn no_suggestions_points_at_cities_command() {
        let message = format_unknown_city_message("Gotham", &[]);
        assert!(message.contains("`cities`"));
    }
}
