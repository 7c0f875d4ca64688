use super::Response;
use crate::{
    error::{self, Result},
    extractors::Multipart,
    uploads::StoredFile,
    validation::{self, Rule, Violation},
    StateTrait,
};
use axum::{extract::State, http::StatusCode, Json};
use bytes::Bytes;
use entity::shows::{self, Category};
use sea_orm::{ActiveValue::NotSet, EntityTrait, Set};

const IMAGE_FIELD: &str = "image";

#[derive(Default)]
struct Form {
    title: String,
    description: String,
    category: Option<Category>,
    image: Option<Upload>,
}

struct Upload {
    file_name: String,
    data: Bytes,
}

/// A form that passed every rule.
struct NewShow {
    title: String,
    description: String,
    category: Category,
    image: Option<Upload>,
}

const RULES: &[Rule<Form>] = &[
    Rule::body(
        "title",
        |form: &Form| !form.title.is_empty(),
        "Title is required",
    ),
    Rule::body(
        "description",
        |form: &Form| !form.description.is_empty(),
        "Description is required",
    ),
    Rule::body(
        "category",
        |form: &Form| form.category.is_some(),
        "Category must be movie, anime, or serie",
    ),
];

impl Form {
    async fn read(mut multipart: Multipart) -> Result<Self> {
        let mut form = Form::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_owned();

            if let Some(file_name) = field.file_name().map(ToOwned::to_owned) {
                if name != IMAGE_FIELD || form.image.is_some() {
                    return Err(error::UNEXPECTED_FILE);
                }

                let data = field.bytes().await?;

                // An empty file input is sent without a name or content.
                if file_name.is_empty() && data.is_empty() {
                    continue;
                }

                form.image = Some(Upload { file_name, data });
                continue;
            }

            let value = field.text().await?;

            match name.as_str() {
                "title" => form.title = value,
                "description" => form.description = value,
                "category" => form.category = value.parse().ok(),
                _ => trace!("ignoring form field {:?}", name),
            }
        }

        Ok(form)
    }

    fn validate(self) -> std::result::Result<NewShow, Vec<Violation>> {
        let violations = validation::violations(&self, RULES);

        match self.category {
            Some(category) if violations.is_empty() => Ok(NewShow {
                title: self.title,
                description: self.description,
                category,
                image: self.image,
            }),
            _ => Err(violations),
        }
    }
}

pub async fn create_show<S: StateTrait>(
    State(state): State<S>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Response>)> {
    let NewShow {
        title,
        description,
        category,
        image,
    } = Form::read(multipart).await?.validate()?;

    let stored = match image {
        Some(upload) => Some(
            state
                .uploads()
                .store(&upload.file_name, &upload.data)
                .await?,
        ),
        None => None,
    };

    let image = stored.as_ref().map(StoredFile::public_path);

    let show = shows::ActiveModel {
        id: NotSet,
        title: Set(title.clone()),
        description: Set(description.clone()),
        category: Set(category),
        image: Set(image.clone()),
    };

    let id = match shows::Entity::insert(show).exec(state.db()).await {
        Ok(res) => res.last_insert_id,
        Err(err) => {
            if let Some(file) = &stored {
                if let Err(error) = state.uploads().remove(file).await {
                    warn!(
                        "failed to remove orphaned upload {}: {}",
                        file.path().display(),
                        error
                    );
                }
            }

            return Err(err.into());
        }
    };

    info!("created show {} ({})", id, category);

    Ok((
        StatusCode::CREATED,
        Json(Response {
            id,
            title,
            description,
            category,
            image,
        }),
    ))
}
