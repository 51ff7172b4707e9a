fn main() {
    // Validate embedded TOML tables at compile time.
    validate_toml(
        "src/data/unicode_to_hanyu_pinyin.toml",
        include_str!("src/data/unicode_to_hanyu_pinyin.toml"),
    );
    validate_toml(
        "src/data/pinyin_mapping.toml",
        include_str!("src/data/pinyin_mapping.toml"),
    );
    println!("cargo:rerun-if-changed=src/data");
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Table>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
