//! Slovak messages

pub(super) const MESSAGES: &[(&str, &str)] = &[
    ("app.title", "Liquid Glass"),
    ("app.subtitle", "Špeciálne SEO prompty pre Gemini"),
    ("app.promptCount", "Zobrazených: {visible} / {total}"),
    ("app.cta", "Klikni na kartu pre skopírovanie"),
    ("app.searchPlaceholder", "Hľadať prompty..."),
    ("app.settingsButton", "Nastavenia"),
    ("app.settingsButton.aria", "Globálne nastavenia"),
    ("app.footer", "Vytvorené s Gemini & React • Liquid Glass UI"),
    ("app.noResults.title", "Nenašli sa žiadne prompty"),
    ("app.noResults.description", "Skúste upraviť výraz"),
    ("promptCard.copyAriaLabel", "Kopírovať prompt: {title}"),
    ("promptCard.responseTitle", "Gemini Odpoveď:"),
    ("promptCard.copyResponseButton", "Kopírovať"),
    ("promptCard.copyResponseButton.aria", "Skopírovať odpoveď"),
    ("promptCard.clearResponseButton.aria", "Vymazať odpoveď"),
    ("promptCard.runWithGeminiButton.aria", "Spustiť s Gemini"),
    ("promptCard.runWithGeminiButton.tooltip", "Spustiť s Gemini"),
    ("promptCard.runWithGeminiButton.tooltipDisabled", "Najprv vyplňte premenné"),
    ("promptCard.customizeButton.aria", "Prispôsobiť premenné"),
    ("promptCard.customizeButton.tooltip", "Prispôsobiť"),
    ("promptCard.copyChip", "copy"),
    ("promptCard.generating", "Generujem odpoveď..."),
    (
        "promptCard.error",
        "Chyba pri komunikácii s Gemini API. Skontrolujte konzolu pre viac detailov.",
    ),
    ("promptCard.fillVariablesWarning", "Najprv vyplňte všetky premenné."),
    ("promptCard.variableInputLabel", "{placeholder}"),
    ("promptCard.variableInputPlaceholder", "Zadajte {placeholder}..."),
    ("codeBlock.copyButton.aria", "Skopírovať kód"),
    ("settingsModal.title", "Globálne premenné"),
    (
        "settingsModal.description",
        "Tieto hodnoty sa automaticky vyplnia do všetkých relevantných promptov.",
    ),
    ("settingsModal.cancelButton", "Zrušiť"),
    ("settingsModal.saveButton", "Uložiť"),
    ("toast.promptCopied", "Prompt skopírovaný ✓"),
    ("toast.responseCopied", "Odpoveď skopírovaná ✓"),
    ("toast.codeCopied", "Kód skopírovaný ✓"),
    ("toast.copyError", "Skopíruj ručne (Clipboard blokovaný)"),
    ("languageSwitcher.tooltip", "Zmeniť jazyk"),
];
