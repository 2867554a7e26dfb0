use std::sync::LazyLock;

/// Minimal slot template: literal text interleaved with `{{name}}` slots.
///
/// The built-in skeletons are parsed once into segment lists and shared
/// process-wide; after initialization they are read-only, so concurrent
/// renders from multiple charts are safe.
#[derive(Debug)]
pub(crate) struct Template {
    segments: Vec<Segment>,
}

#[derive(Debug)]
enum Segment {
    Text(&'static str),
    Slot(&'static str),
}

impl Template {
    fn parse(source: &'static str) -> Self {
        let mut segments = Vec::new();
        let mut rest = source;
        while let Some(start) = rest.find("{{") {
            let (text, tail) = rest.split_at(start);
            if !text.is_empty() {
                segments.push(Segment::Text(text));
            }
            let tail = &tail[2..];
            let Some(end) = tail.find("}}") else {
                // Unterminated slot: keep the remainder as literal text.
                segments.push(Segment::Text(tail));
                return Self { segments };
            };
            segments.push(Segment::Slot(&tail[..end]));
            rest = &tail[end + 2..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest));
        }
        Self { segments }
    }

    /// Fills the slots from `(name, value)` pairs; unknown slots render
    /// empty.
    pub(crate) fn render(&self, slots: &[(&str, &str)]) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Slot(name) => {
                    if let Some((_, value)) = slots.iter().find(|(slot, _)| slot == name) {
                        out.push_str(value);
                    }
                }
            }
        }
        out
    }
}

const CONTENT_SKELETON: &str = "\
{{head_script_block}}{{container}}<script type=\"text/javascript\">
{{chart_init}}</script>
{{end_script_block}}";

const PAGE_SKELETON: &str = "\
<!DOCTYPE html>
<html>
    <head>
        <meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\" />
{{header}}
    </head>
    <body>
{{content}}
    </body>
</html>
";

static CONTENT_TEMPLATE: LazyLock<Template> = LazyLock::new(|| Template::parse(CONTENT_SKELETON));
static PAGE_TEMPLATE: LazyLock<Template> = LazyLock::new(|| Template::parse(PAGE_SKELETON));

pub(crate) fn content_template() -> &'static Template {
    &CONTENT_TEMPLATE
}

pub(crate) fn page_template() -> &'static Template {
    &PAGE_TEMPLATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_slots_render_empty() {
        let template = Template::parse("a{{missing}}b");
        assert_eq!(template.render(&[]), "ab");
    }

    #[test]
    fn slots_fill_in_order() {
        let template = Template::parse("{{x}}-{{y}}-{{x}}");
        assert_eq!(template.render(&[("x", "1"), ("y", "2")]), "1-2-1");
    }
}
