use std::fs;

pub fn settings_export() {
    print!("{}", gok_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        gok_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: output.word_separator={:?}, numbers.expand={}",
        s.output.word_separator, s.numbers.expand
    );
}
