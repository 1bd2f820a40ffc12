//! CLI parsing tests for the get command.

#[cfg(test)]
mod tests {
    use crate::commands::EntityKind;

    crate::cli_parse_tests! {
        test_get_defaults: Get ["get", "msite", "1"] => {
            entity: EntityKind::MSite,
            id: 1,
            with: None,
        },
        test_get_with_relationship: Get ["get", "magnet", "12", "--with", "mparts"] => {
            id: 12,
            with: Some("mparts".to_string()),
        },
        test_get_short_with: Get ["get", "mpart", "4", "-w", "magnets"] => {
            with: Some("magnets".to_string()),
        },
    }

    crate::cli_rejects! {
        test_get_requires_entity: ["get"] mentioning "<ENTITY>",
        test_get_non_numeric_id_rejected: ["get", "magnet", "M9"],
    }
}
