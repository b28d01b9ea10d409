use graphwalk_core::format::{LabelStyle, OutputFormat};

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse vertex label style from string
pub fn parse_label_style(s: &str) -> std::result::Result<LabelStyle, String> {
    s.parse::<LabelStyle>().map_err(|e| e.to_string())
}
