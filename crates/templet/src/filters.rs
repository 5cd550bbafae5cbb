//! Case-conversion filters registered on every compiled template unit.

use std::collections::HashMap;

use heck::{
    ToKebabCase, ToLowerCamelCase, ToPascalCase, ToShoutySnakeCase, ToSnakeCase, ToTitleCase,
};
use tera::{Result, Tera, Value};

type Filter = fn(&Value, &HashMap<String, Value>) -> Result<Value>;

const BUILTIN_FILTERS: &[(&str, Filter)] = &[
    ("snake_case", snake_case),
    ("kebab_case", kebab_case),
    ("pascal_case", pascal_case),
    ("camel_case", camel_case),
    ("title_case", title_case),
    ("shouty_snake_case", shouty_snake_case),
];

pub(crate) fn register_builtin_filters(tera: &mut Tera) {
    for (name, filter) in BUILTIN_FILTERS {
        tera.register_filter(name, *filter);
    }
}

fn convert(name: &str, value: &Value, f: impl Fn(&str) -> String) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("{name} filter expects a string")))?;
    Ok(Value::String(f(s)))
}

fn snake_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    convert("snake_case", value, |s| s.to_snake_case())
}

fn kebab_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    convert("kebab_case", value, |s| s.to_kebab_case())
}

fn pascal_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    convert("pascal_case", value, |s| s.to_pascal_case())
}

fn camel_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    convert("camel_case", value, |s| s.to_lower_camel_case())
}

fn title_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    convert("title_case", value, |s| s.to_title_case())
}

fn shouty_snake_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    convert("shouty_snake_case", value, |s| s.to_shouty_snake_case())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tera::Context;

    fn render(source: &str, name: &str) -> String {
        let mut tera = Tera::default();
        register_builtin_filters(&mut tera);
        tera.add_raw_template("t", source).unwrap();

        let mut context = Context::new();
        context.insert("name", name);
        tera.render("t", &context).unwrap()
    }

    #[test]
    fn test_filters_available_in_templates() {
        assert_eq!(render("{{ name | snake_case }}", "BlogPost"), "blog_post");
        assert_eq!(render("{{ name | kebab_case }}", "BlogPost"), "blog-post");
        assert_eq!(render("{{ name | pascal_case }}", "blog_post"), "BlogPost");
        assert_eq!(render("{{ name | camel_case }}", "blog_post"), "blogPost");
        assert_eq!(render("{{ name | title_case }}", "blog_post"), "Blog Post");
        assert_eq!(render("{{ name | shouty_snake_case }}", "blogPost"), "BLOG_POST");
    }

    #[test]
    fn test_filter_rejects_non_string() {
        let args = HashMap::new();
        let err = snake_case(&Value::from(42), &args).unwrap_err();
        assert!(err.to_string().contains("snake_case filter expects a string"));
    }
}
