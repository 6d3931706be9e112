/// Flags groups of rows sharing a column value.
pub fn column_values_are_unique(column: &str) -> String {
    format!("SELECT {column}, COUNT(*)\nFROM ...\nGROUP BY {column}\nHAVING COUNT(*)>1;\n")
}

/// 1/0 flag on whether the distinct value count falls inside the bounds.
pub fn column_unique_value_count_is_between(column: &str, lower: &str, upper: &str) -> String {
    format!(
        "SELECT\n    CASE WHEN COUNT(DISTINCT {column}) >= {lower} AND COUNT(DISTINCT {column}) <= {upper}\n    THEN 1 ELSE 0 END AS result\nFROM ...\n"
    )
}

#[cfg(test)]
mod tests {
    use crate::checks::uniq::{column_unique_value_count_is_between, column_values_are_unique};

    const COLUMNS: &[&str] = &["age", "user_id", "amount"];

    #[test]
    fn unique_check_groups_and_filters_on_the_column() {
        for &column in COLUMNS {
            let sql = column_values_are_unique(column);
            assert!(sql.contains(&format!("GROUP BY {column}")));
            assert!(sql.contains("HAVING COUNT(*)>1"));
        }
    }

    #[test]
    fn unique_count_check_uses_distinct_count() {
        for &column in COLUMNS {
            let sql = column_unique_value_count_is_between(column, "3", "7");
            assert!(sql.contains(&format!("COUNT(DISTINCT {column}) >= 3")));
            assert!(sql.contains(&format!("COUNT(DISTINCT {column}) <= 7")));
            assert!(sql.contains("THEN 1 ELSE 0"));
        }
    }
}
