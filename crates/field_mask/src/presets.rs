//! Named mask patterns.

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub static PRESETS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("credit-card", "#### - #### - #### - ####");
    map.insert("date", "##/##/####");
    map.insert("date-with-time", "##/##/#### ##:##");
    map.insert("phone", "(###) ### - ####");
    map.insert("social", "###-##-####");
    map.insert("time", "##:##");
    map.insert("time-with-seconds", "##:##:##");
    map
});

pub fn preset(name: &str) -> Option<&'static str> {
    PRESETS.get(name).copied()
}
