use toml::{Table, Value};

/// Deep-merges `overlay` into `base`.
///
/// Keys whose values are tables on both sides are merged recursively; any
/// other key in `overlay` replaces the value in `base`. Keys missing from
/// `overlay` are left alone.
pub fn merge_tables(base: &mut Table, overlay: &Table) {
    for (key, value) in overlay {
        if let (Some(Value::Table(existing)), Value::Table(incoming)) = (base.get_mut(key), value) {
            merge_tables(existing, incoming);
            continue;
        }
        base.insert(key.clone(), value.clone());
    }
}
