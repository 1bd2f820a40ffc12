//! CLI parsing tests for the update command.

#[cfg(test)]
mod tests {
    use crate::commands::EntityKind;

    crate::cli_parse_tests! {
        test_update_entity_and_id: Update ["update", "material", "5", "--json", "{}"] => {
            entity: EntityKind::Material,
            id: 5,
            json: "{}",
        },
    }

    crate::cli_rejects! {
        test_update_requires_entity: ["update"] mentioning "<ENTITY>",
        test_update_requires_json: ["update", "material", "5"] mentioning "--json",
    }
}
