pub fn run() -> anyhow::Result<()> {
    println!("healthlynk {}", env!("CARGO_PKG_VERSION"));
    println!("Symptom chat assistant with a simulated vitals dashboard");
    Ok(())
}
