// Matchers generated by build.rs from patterns.json.

include!(concat!(env!("OUT_DIR"), "/patterns.rs"));


fn main() {
    for version in ["1.2.3", "0.10.0-beta.1", "01.2.3"] {
        match Semver::find(version) {
            Some(v) => println!(
                "{version}: major={} minor={} patch={} prerelease={:?}",
                v.Major(),
                v.Minor(),
                v.Patch(),
                v.Prerelease().raw().map(|m| m.as_str())
            ),
            None => println!("{version}: not a version"),
        }
    }

    if let Some(line) = logs::LogLine::find("[WARN] net::client: retrying in 5s") {
        println!(
            "level={} target={} message={}",
            line.Level(),
            line.Group2(),
            line.Message()
        );
    }

    let config = "name = typed_regex\n  edition=2024\n";
    for entry in KeyValue::matches(config) {
        println!("{} -> {}", entry.Key(), entry.Value());
    }
}
