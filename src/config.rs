pub const LLIST_DEFAULT_MAX_SCAN: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    /// Node slots reserved up front by `List::with_config`.
    pub node_capacity: usize,
    /// Longest string, terminator excluded, `string_to_list` accepts for
    /// size -1.
    pub max_scan: usize,
}

impl Config {
    pub fn new() -> Config {
        Config {
            node_capacity: 0,
            max_scan: LLIST_DEFAULT_MAX_SCAN,
        }
    }

    pub fn with_node_capacity(mut self, node_capacity: usize) -> Config {
        self.node_capacity = node_capacity;
        self
    }

    pub fn with_max_scan(mut self, max_scan: usize) -> Config {
        self.max_scan = max_scan;
        self
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}
