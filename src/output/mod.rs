// Output formatting — terminal display for check results.

pub mod terminal;
