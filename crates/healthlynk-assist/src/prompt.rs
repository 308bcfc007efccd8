pub fn build_prompt(user_input: &str, detected_condition: Option<&str>) -> String {
    let hint = detected_condition
        .map(|c| format!("I've detected they might be talking about: {c}"))
        .unwrap_or_default();
    format!(
        "You are a helpful healthcare assistant who provides information about health concerns. \
         The user message is: {user_input}. {hint}"
    )
}
