use serde_json::json;
use std::path::Path;

use crate::cli::utils::{output_error, output_success};
use crate::cli::OutputFormat;
use crate::store::{JsonFileStore, User, UserStore};
use crate::validation::{validate_user, ValidationError};

/// Every record that fails validation against the rest of the collection
pub fn find_problems(users: &[User]) -> Vec<(usize, i64, ValidationError)> {
    users
        .iter()
        .enumerate()
        .filter_map(|(index, user)| {
            let others: Vec<User> = users
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != index)
                .map(|(_, u)| u.clone())
                .collect();

            validate_user(&user.to_payload(), &others, None)
                .err()
                .map(|err| (index, user.id, err))
        })
        .collect()
}

pub async fn handle(path: &Path, output_format: OutputFormat) -> anyhow::Result<()> {
    let users = JsonFileStore::new(path).load_all().await?;
    let problems = find_problems(&users);

    if problems.is_empty() {
        return output_success(
            output_format,
            &format!("{} users in {} are valid", users.len(), path.display()),
            Some(json!({ "count": users.len() })),
        );
    }

    if let OutputFormat::Text = output_format {
        for (index, id, err) in &problems {
            eprintln!("  record #{} (id {}): {}", index, id, err);
        }
    }

    let details: Vec<_> = problems
        .iter()
        .map(|(index, id, err)| json!({ "index": index, "id": id, "error": err.to_string() }))
        .collect();
    output_error(
        output_format,
        &format!("{} invalid record(s) in {}", problems.len(), path.display()),
        Some(json!(details)),
    )?;

    anyhow::bail!("validation failed")
}
