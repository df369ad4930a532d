// Colors and the stylesheet injected at the top of the window.

#[derive(Debug, Clone, PartialEq)]
pub struct ThemePalette {
    pub background: String,
    pub card: String,
    pub foreground: String,
    pub primary: String,
    pub primary_light: String,
    pub result_background: String,
    pub result_foreground: String,
    pub error_background: String,
    pub error_foreground: String,
}

impl ThemePalette {
    pub fn default_light() -> Self {
        Self {
            background: "#f1f3f6".to_string(),
            card: "#ffffff".to_string(),
            foreground: "#333333".to_string(),
            primary: "#0072ff".to_string(),
            primary_light: "#00c6ff".to_string(),
            result_background: "#e0f7fa".to_string(),
            result_foreground: "#006064".to_string(),
            error_background: "#fdecea".to_string(),
            error_foreground: "#b71c1c".to_string(),
        }
    }

    pub fn stylesheet(&self) -> String {
        format!(
            r#"
body {{ font-family: 'Poppins', sans-serif; background-color: {bg}; color: {fg}; margin: 2em; }}
.main-title {{ font-size: 48px; font-weight: 700; color: {primary}; margin-bottom: 10px; }}
.section-title {{ font-size: 24px; font-weight: 600; margin-top: 40px; margin-bottom: 10px; }}
.card {{ background-color: {card}; padding: 25px; border-radius: 18px; box-shadow: 0 6px 20px rgba(0,0,0,0.06); }}
.card table {{ width: 100%; border-collapse: collapse; }}
.card th, .card td {{ padding: 6px 12px; text-align: right; }}
.fields {{ display: flex; gap: 1em; }}
.fields label {{ flex: 1; display: flex; flex-direction: column; }}
.predict-btn {{ background: linear-gradient(90deg, {primary}, {primary_light}); color: white; font-weight: bold;
  border: none; border-radius: 10px; padding: 0.6em 1.2em; margin-top: 20px; width: 100%; cursor: pointer; }}
.result-box {{ background-color: {result_bg}; color: {result_fg}; font-weight: bold; padding: 15px;
  border-radius: 12px; font-size: 18px; margin-top: 20px; text-align: center; }}
.result-value {{ font-size: 28px; }}
.error-box {{ background-color: {error_bg}; color: {error_fg}; padding: 15px; border-radius: 12px; margin-top: 20px; }}
"#,
            bg = self.background,
            fg = self.foreground,
            card = self.card,
            primary = self.primary,
            primary_light = self.primary_light,
            result_bg = self.result_background,
            result_fg = self.result_foreground,
            error_bg = self.error_background,
            error_fg = self.error_foreground,
        )
    }
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self::default_light()
    }
}
