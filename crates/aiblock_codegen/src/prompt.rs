//! Prompt assembly.

use aiblock_core::GenerationRequest;

/// Assemble the full model prompt for `request`.
///
/// The template fixes the assistant's role and the output contract: a single
/// JSON object with exactly the string keys `html` and `css`, no Markdown
/// fences, no surrounding prose. The instruction and markup are inserted
/// verbatim at the end.
///
/// # Examples
///
/// ```
/// use aiblock_codegen::build_prompt;
/// use aiblock_core::GenerationRequest;
///
/// let request = GenerationRequest::new("Add a shadow", "<div>hi</div>").unwrap();
/// let prompt = build_prompt(&request);
/// assert!(prompt.ends_with("Target HTML: <div>hi</div>\n"));
/// ```
pub fn build_prompt(request: &GenerationRequest) -> String {
    format!(
        "You are a professional front-end engineer.\n\
         You will receive a piece of HTML and an instruction describing how to change it.\n\
         Follow the instruction to rewrite the HTML, and write a CSS stylesheet that decorates the rewritten HTML.\n\
         \n\
         Follow these rules strictly:\n\
         - Your answer must be JSON.\n\
         - The JSON object must have exactly two keys: 'html' and 'css'.\n\
         - The value of 'html' is the modified HTML code, as a string.\n\
         - The value of 'css' is the generated CSS code, as a string.\n\
         - Never wrap the JSON in Markdown code block markers such as ```json or ```.\n\
         - Answer with the bare JSON object only. Do not add explanations or any other text.\n\
         \n\
         User instruction: {}\n\
         Target HTML: {}\n",
        request.instruction(),
        request.target_markup()
    )
}
