//! English messages

pub(super) const MESSAGES: &[(&str, &str)] = &[
    ("app.title", "Liquid Glass"),
    ("app.subtitle", "Specialized SEO Prompts for Gemini"),
    ("app.promptCount", "Showing: {visible} / {total}"),
    ("app.cta", "Click a card to copy the prompt"),
    ("app.searchPlaceholder", "Search prompts..."),
    ("app.settingsButton", "Settings"),
    ("app.settingsButton.aria", "Global settings"),
    ("app.footer", "Crafted with Gemini & React • Liquid Glass UI"),
    ("app.noResults.title", "No Prompts Found"),
    ("app.noResults.description", "Try adjusting your search term"),
    ("promptCard.copyAriaLabel", "Copy prompt: {title}"),
    ("promptCard.responseTitle", "Gemini Response:"),
    ("promptCard.copyResponseButton", "Copy"),
    ("promptCard.copyResponseButton.aria", "Copy response"),
    ("promptCard.clearResponseButton.aria", "Clear response"),
    ("promptCard.runWithGeminiButton.aria", "Run with Gemini"),
    ("promptCard.runWithGeminiButton.tooltip", "Run with Gemini"),
    ("promptCard.runWithGeminiButton.tooltipDisabled", "First, fill in the variables"),
    ("promptCard.customizeButton.aria", "Customize variables"),
    ("promptCard.customizeButton.tooltip", "Customize"),
    ("promptCard.copyChip", "copy"),
    ("promptCard.generating", "Generating response..."),
    (
        "promptCard.error",
        "Error communicating with the Gemini API. Check the console for more details.",
    ),
    ("promptCard.fillVariablesWarning", "Please fill in all variables first."),
    ("promptCard.variableInputLabel", "{placeholder}"),
    ("promptCard.variableInputPlaceholder", "Enter {placeholder}..."),
    ("codeBlock.copyButton.aria", "Copy code"),
    ("settingsModal.title", "Global Variables"),
    (
        "settingsModal.description",
        "These values will be automatically filled into all relevant prompts.",
    ),
    ("settingsModal.cancelButton", "Cancel"),
    ("settingsModal.saveButton", "Save"),
    ("toast.promptCopied", "Prompt copied ✓"),
    ("toast.responseCopied", "Response copied ✓"),
    ("toast.codeCopied", "Code copied ✓"),
    ("toast.copyError", "Copy manually (Clipboard blocked)"),
    ("languageSwitcher.tooltip", "Change language"),
];
