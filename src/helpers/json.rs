use actix_web::HttpResponse;
use serde::Serialize;

/// Success body: `{"success": true, "drinks": [...]}` or `{"success": true, "delete": id}`.
#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub(crate) success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) drinks: Option<Vec<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) delete: Option<i32>,
}

pub struct JsonResponseBuilder<T>
where
    T: Serialize,
{
    drinks: Option<Vec<T>>,
    delete: Option<i32>,
}

impl<T> JsonResponse<T>
where
    T: Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            drinks: None,
            delete: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: Serialize,
{
    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.drinks = Some(list);
        self
    }

    pub fn set_item(self, item: T) -> Self {
        self.set_list(vec![item])
    }

    pub fn set_deleted(mut self, id: i32) -> Self {
        self.delete = Some(id);
        self
    }

    pub fn ok(self) -> HttpResponse {
        HttpResponse::Ok().json(JsonResponse {
            success: true,
            drinks: self.drinks,
            delete: self.delete,
        })
    }
}
