//! Page shell the artifact is loaded into.

use minijinja::{context, Environment};

/// Context for rendering the page shell.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ShellContext {
    /// Page title
    pub title: String,
    /// Language tag of the translation
    pub lang: String,
    /// Stylesheets to link
    pub styles: Vec<String>,
}

impl Default for ShellContext {
    fn default() -> Self {
        Self {
            title: "TypeScript Handbook".to_string(),
            lang: "zh-CN".to_string(),
            styles: vec![],
        }
    }
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a template engine with the built-in shell.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("shell.html", SHELL_TEMPLATE)?;

        Ok(Self { env })
    }

    /// Render the page shell.
    ///
    /// The result has an empty `[role="nav"]` bar and an empty
    /// `[role="container"]` region for the loader to fill.
    pub fn render_shell(&self, context: &ShellContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("shell.html")?;

        tmpl.render(context! {
            title => &context.title,
            lang => &context.lang,
            styles => &context.styles,
        })
    }
}

const SHELL_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  {% for style in styles %}<link rel="stylesheet" href="{{ style }}">
  {% endfor %}
</head>
<body>
  <nav role="nav" class="side-nav"></nav>
  <main role="container" class="container"></main>
</body>
</html>"##;
