use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: usize,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub suggestions: Vec<Suggestion>,
}
