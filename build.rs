fn main() {
    // `sqlx::migrate!()` embeds the migrations at compile time; rebuild when
    // a new one is added.
    println!("cargo:rerun-if-changed=migrations");
}
