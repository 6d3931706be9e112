/// 1/0 flag on whether `expr` falls inside the bounds. Bounds are
/// interpolated verbatim; nothing checks that lower stays below upper.
fn bounded_flag(expr: &str, lower: &str, upper: &str) -> String {
    format!(
        "SELECT\n    CASE WHEN {expr}>= {lower}\n          AND {expr}<= {upper}\n           THEN 1 ELSE 0\n    END AS result\n\nFROM ...;\n"
    )
}

fn aggregate_between(aggregate: &str, column: &str, lower: &str, upper: &str) -> String {
    bounded_flag(&format!("{aggregate}({column})"), lower, upper)
}

pub fn column_max_is_between(column: &str, lower: &str, upper: &str) -> String {
    aggregate_between("MAX", column, lower, upper)
}

pub fn column_min_is_between(column: &str, lower: &str, upper: &str) -> String {
    aggregate_between("MIN", column, lower, upper)
}

pub fn column_sum_is_between(column: &str, lower: &str, upper: &str) -> String {
    aggregate_between("SUM", column, lower, upper)
}

pub fn column_mean_is_between(column: &str, lower: &str, upper: &str) -> String {
    aggregate_between("AVG", column, lower, upper)
}

/// Per-row variant: the column itself is bounded, no aggregate.
pub fn column_values_are_between(column: &str, lower: &str, upper: &str) -> String {
    bounded_flag(column, lower, upper)
}
