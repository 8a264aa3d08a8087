use aiblock_codegen::build_prompt;
use aiblock_core::GenerationRequest;

fn prompt_for(instruction: &str, markup: &str) -> String {
    let request = GenerationRequest::new(instruction, markup).expect("Valid request");
    build_prompt(&request)
}

#[test]
fn test_prompt_embeds_inputs_verbatim() {
    let markup = "<ul>\n  <li>{one}</li>\n  <li>\"two\"</li>\n</ul>";
    let prompt = prompt_for("モダンなカードデザインにして", markup);

    assert!(prompt.contains("User instruction: モダンなカードデザインにして\n"));
    assert!(prompt.contains(&format!("Target HTML: {}\n", markup)));
}

#[test]
fn test_prompt_states_output_contract() {
    let prompt = prompt_for("Make it blue", "<p>x</p>");

    assert!(prompt.starts_with("You are a professional front-end engineer."));
    assert!(prompt.contains("exactly two keys: 'html' and 'css'"));
    assert!(prompt.contains("```json"));
    assert!(prompt.contains("bare JSON object only"));
}

#[test]
fn test_instruction_precedes_markup() {
    let prompt = prompt_for("INSTRUCTION-MARK", "MARKUP-MARK");

    let instruction_at = prompt.find("INSTRUCTION-MARK").expect("Instruction present");
    let markup_at = prompt.find("MARKUP-MARK").expect("Markup present");
    assert!(instruction_at < markup_at);
}

#[test]
fn test_prompt_is_deterministic() {
    assert_eq!(
        prompt_for("Add a border", "<div></div>"),
        prompt_for("Add a border", "<div></div>")
    );
}
