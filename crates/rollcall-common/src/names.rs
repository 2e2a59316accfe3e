/// The people on the list, in the order they are called.
pub const NAMES: [&str; 3] = ["Рома", "Игорь", "Вася"];

pub fn names() -> Vec<String> {
    NAMES.iter().map(|name| name.to_string()).collect()
}
