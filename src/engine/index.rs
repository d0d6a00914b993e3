use std::sync::OnceLock;

/// The largest possible number of live neighbors in a Moore neighborhood
pub(super) const MAX_NEIGHBORS: usize = 8;
type RuleTable = [[bool; MAX_NEIGHBORS + 1]; 2];

/// Returns a Singleton lookup table for the Game of Life ruleset
///
/// Equivalent to calling [`generate_rule_table`] once and storing the result
pub(super) fn get_rule_table() -> &'static RuleTable {
    static CELL: OnceLock<RuleTable> = OnceLock::new();
    CELL.get_or_init(generate_rule_table)
}

/// Creates a lookup table for the B3/S23 ruleset
///
/// The table is indexed first by the current state of a cell (`0` dead, `1` alive)
/// and then by its number of live neighbors.
///
/// Returns whether the cell is alive in the next generation
pub(super) fn generate_rule_table() -> RuleTable {
    let mut table = [[false; MAX_NEIGHBORS + 1]; 2];
    for (state, row) in table.iter_mut().enumerate() {
        let alive = state == 1;
        for (neighbors, next) in row.iter_mut().enumerate() {
            *next = match (alive, neighbors) {
                // survival
                (true, 2 | 3) => true,
                // birth
                (false, 3) => true,
                // isolation, overcrowding, or staying dead
                _ => false,
            };
        }
    }
    table
}
