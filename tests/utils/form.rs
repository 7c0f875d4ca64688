use reqwest::multipart::{Form, Part};

pub fn show_form(title: &str, description: &str, category: &str) -> Form {
    Form::new()
        .text("title", title.to_owned())
        .text("description", description.to_owned())
        .text("category", category.to_owned())
}

pub fn image_part(file_name: &str, data: &[u8]) -> Part {
    Part::bytes(data.to_vec())
        .file_name(file_name.to_owned())
        .mime_str("image/png")
        .expect("invalid mime type")
}
