//! SQL text for the generic store. Table and column names only ever come
//! from compile-time constants, values always go through `$n` parameters.

pub fn select_by_id(table: &str) -> String {
    format!("SELECT * FROM {} WHERE id = $1", table)
}

pub fn select_page(table: &str) -> String {
    format!("SELECT * FROM {} ORDER BY id OFFSET $1 LIMIT $2", table)
}

pub fn insert(table: &str, columns: &[&str]) -> String {
    if columns.is_empty() {
        return format!("INSERT INTO {} DEFAULT VALUES RETURNING *", table);
    }
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${}", i)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
        table,
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// `UPDATE` binding the columns first and the id last
pub fn update(table: &str, columns: &[&str]) -> String {
    let sets: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{} = ${}", column, i + 1))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE id = ${} RETURNING *",
        table,
        sets.join(", "),
        columns.len() + 1
    )
}

pub fn delete(table: &str) -> String {
    format!("DELETE FROM {} WHERE id = $1 RETURNING *", table)
}
