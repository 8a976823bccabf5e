use crate::{config::PageConfig, dom::Element, render::render, resolver::Status, Result};

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{ title | escape }}</title>
<style>{{ style }}</style>
</head>
<body>
{{ main }}
</body>
</html>
"#;

const STYLE: &str = "
body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif; }
header a { display: block; padding: 2em; font-size: 2em; text-align: center; color: white; text-decoration: none; }
header.green { background: #2ea043; }
header.red { background: #d73a49; }
.commits { max-width: 50em; margin: 1em auto; }
.commit { display: flex; align-items: center; padding: 0.3em 0; }
.commit .author { display: flex; align-items: center; min-width: 12em; color: inherit; text-decoration: none; }
.commit .avatar { margin-right: 0.5em; border-radius: 3px; }
.commit .message { color: inherit; }
";

/// The HTML document the status is rendered into
pub struct Page {
    template: liquid::Template,
    title: String,
    mount_id: String,
}

impl Page {
    pub fn new(config: &PageConfig) -> Result<Self> {
        let template = liquid::ParserBuilder::with_stdlib()
            .build()?
            .parse(TEMPLATE)?;

        Ok(Self {
            template,
            title: config.title.clone(),
            mount_id: config.mount_id.clone(),
        })
    }

    /// A fresh, empty mount point
    pub fn mount_point(&self) -> Element {
        Element::new("div").with_attribute("id", self.mount_id.as_str())
    }

    /// Full document with `status` rendered into the mount point. Without a status the mount
    /// point is left empty.
    pub fn render(&self, status: Option<&Status>) -> Result<String> {
        let mut document = Element::new("body");
        document.append_child(self.mount_point());

        if let Some(status) = status {
            if let Some(mount) = document.element_by_id_mut(&self.mount_id) {
                render(status, mount);
            }
        }

        let main = document
            .child_elements()
            .map(ToString::to_string)
            .collect::<String>();

        let globals = liquid::object!({
            "title": self.title,
            "style": STYLE,
            "main": main,
        });

        Ok(self.template.render(&globals)?)
    }
}
