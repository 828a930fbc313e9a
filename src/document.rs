//! The HTML page that wraps a rendered body.

use crate::HtmlWriter;
use crate::escape;

/// Title used when neither the shell nor the source provides one.
pub const DEFAULT_TITLE: &str = "Document";

/// Page language used by [`Shell::default`].
pub const DEFAULT_LANG: &str = "zh-CN";

const STYLE: &str = r#"        body {
            font-family: 'Microsoft YaHei', 'Segoe UI', Roboto, Arial, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 1000px;
            margin: 0 auto;
            padding: 20px;
            background-color: #fff;
        }
        h1 {
            color: #2c3e50;
            text-align: center;
            margin-bottom: 30px;
            padding-bottom: 15px;
            border-bottom: 2px solid #3498db;
        }
        h2 {
            color: #2980b9;
            margin-top: 40px;
            padding-bottom: 10px;
            border-bottom: 1px solid #eaeaea;
        }
        h3 {
            color: #16a085;
            margin-top: 30px;
        }
        h4 {
            color: #27ae60;
            margin-top: 25px;
        }
        h5, h6 {
            color: #f39c12;
        }
        p {
            margin: 15px 0;
            text-align: justify;
        }
        ul, ol {
            margin: 15px 0;
            padding-left: 30px;
        }
        li {
            margin-bottom: 8px;
        }
        pre {
            background-color: #f8f9fa;
            border: 1px solid #e9ecef;
            border-radius: 4px;
            padding: 15px;
            overflow-x: auto;
            font-family: Monaco, Consolas, 'Courier New', monospace;
            margin: 20px 0;
        }
        code {
            font-family: Monaco, Consolas, 'Courier New', monospace;
            background-color: #f8f9fa;
            padding: 2px 4px;
            border-radius: 3px;
        }
        table {
            width: 100%;
            border-collapse: collapse;
            margin: 20px 0;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 12px;
            text-align: left;
        }
        th {
            background-color: #f2f2f2;
            font-weight: bold;
        }
        tr:nth-child(even) {
            background-color: #f9f9f9;
        }
        img {
            max-width: 100%;
            height: auto;
            margin: 20px auto;
            display: block;
        }
        a {
            color: #3498db;
            text-decoration: none;
        }
        a:hover {
            text-decoration: underline;
        }
"#;

/// Page template settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    /// Explicit page title. When unset, the first level-1 heading of the
    /// source is used, then [`DEFAULT_TITLE`].
    pub title: Option<String>,
    /// Value of the `<html lang>` attribute.
    pub lang: String,
}

impl Default for Shell {
    fn default() -> Self {
        Self {
            title: None,
            lang: DEFAULT_LANG.to_owned(),
        }
    }
}

impl Shell {
    /// Resolve the title to print: explicit, detected, or the default.
    pub fn resolve_title<'a>(&'a self, detected: Option<&'a str>) -> &'a str {
        self.title
            .as_deref()
            .or(detected)
            .filter(|title| !title.is_empty())
            .unwrap_or(DEFAULT_TITLE)
    }

    /// Embed `body` in the page template. The body is inserted verbatim;
    /// title and language are escaped.
    pub fn wrap(&self, body: &str, detected_title: Option<&str>) -> String {
        let mut writer = HtmlWriter::with_capacity_for(body.len() + STYLE.len() + 512);
        writer.line("<!DOCTYPE html>");
        writer.write_str("<html lang=\"");
        writer.write_attr(&self.lang, true);
        writer.line("\">");
        writer.line("<head>");
        writer.line("    <meta charset=\"UTF-8\">");
        writer.line(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">",
        );
        writer.write_str("    <title>");
        writer.write_str(&escape::escape_text_to_string(
            self.resolve_title(detected_title),
        ));
        writer.line("</title>");
        writer.line("    <style>");
        writer.write_str(STYLE);
        writer.line("    </style>");
        writer.line("</head>");
        writer.line("<body>");
        writer.write_str("    ");
        writer.line(body);
        writer.line("</body>");
        writer.write_str("</html>");
        writer.into_string()
    }
}
