use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{
    OpenApi,
    param::{Header, Path},
    payload::Json,
};

use crate::{
    application::usecases::{create_meal::CreateMealRequest, update_meal::UpdateMealRequest},
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::{diet_flag, map_domain_error, map_meal, map_metrics, parse_meal_id},
        requests::{CreateMealRequestDto, UpdateMealRequestDto},
        responses::{CreateMealResponse, DeleteMealResponse, MealDto, MealMetricsDto},
        security::authorize,
    },
};

#[derive(Clone)]
pub struct MealsEndpoints {
    state: Arc<ApiState>,
}

impl MealsEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl MealsEndpoints {
    /// Adherence metrics over the caller's meals
    #[oai(path = "/meals/metrics", method = "get", tag = EndpointsTags::Meals)]
    pub async fn get_metrics(
        &self,
        #[oai(name = "user-id")] user_id: Header<Option<String>>,
    ) -> PoemResult<Json<MealMetricsDto>> {
        let user_id = authorize(&self.state, user_id.0.as_deref()).await?;

        let metrics = self
            .state
            .compute_metrics_usecase
            .execute(user_id)
            .await
            .map_err(map_domain_error)?;

        Ok(Json(map_metrics(&metrics)))
    }

    #[oai(path = "/meals", method = "post", tag = EndpointsTags::Meals)]
    pub async fn create_meal(
        &self,
        #[oai(name = "user-id")] user_id: Header<Option<String>>,
        request: Json<CreateMealRequestDto>,
    ) -> PoemResult<CreateMealResponse> {
        let user_id = authorize(&self.state, user_id.0.as_deref()).await?;
        let request = request.0;

        let meal = self
            .state
            .create_meal_usecase
            .execute(CreateMealRequest {
                user_id,
                is_inside_diet: diet_flag(request.is_inside_diet.as_ref()),
                name: request.name,
                description: request.description,
                date_time: request.date_time,
            })
            .await
            .map_err(map_domain_error)?;

        Ok(CreateMealResponse::Created(Json(map_meal(&meal))))
    }

    #[oai(path = "/meals", method = "get", tag = EndpointsTags::Meals)]
    pub async fn list_meals(
        &self,
        #[oai(name = "user-id")] user_id: Header<Option<String>>,
    ) -> PoemResult<Json<Vec<MealDto>>> {
        let user_id = authorize(&self.state, user_id.0.as_deref()).await?;

        let meals = self
            .state
            .list_meals_usecase
            .execute(user_id)
            .await
            .map_err(map_domain_error)?;

        Ok(Json(meals.iter().map(map_meal).collect()))
    }

    #[oai(path = "/meals/:meal_id", method = "get", tag = EndpointsTags::Meals)]
    pub async fn get_meal(
        &self,
        #[oai(name = "user-id")] user_id: Header<Option<String>>,
        meal_id: Path<String>,
    ) -> PoemResult<Json<MealDto>> {
        let user_id = authorize(&self.state, user_id.0.as_deref()).await?;
        let meal_id = parse_meal_id(&meal_id.0).map_err(map_domain_error)?;

        let meal = self
            .state
            .get_meal_usecase
            .execute(user_id, meal_id)
            .await
            .map_err(map_domain_error)?;

        Ok(Json(map_meal(&meal)))
    }

    /// Partial update: omitted or null fields keep their value
    #[oai(path = "/meals/:meal_id", method = "put", tag = EndpointsTags::Meals)]
    pub async fn update_meal(
        &self,
        #[oai(name = "user-id")] user_id: Header<Option<String>>,
        meal_id: Path<String>,
        request: Json<UpdateMealRequestDto>,
    ) -> PoemResult<Json<MealDto>> {
        let user_id = authorize(&self.state, user_id.0.as_deref()).await?;
        let meal_id = parse_meal_id(&meal_id.0).map_err(map_domain_error)?;
        let request = request.0;

        let meal = self
            .state
            .update_meal_usecase
            .execute(UpdateMealRequest {
                user_id,
                meal_id,
                is_inside_diet: diet_flag(request.is_inside_diet.as_ref()),
                name: request.name,
                description: request.description,
                date_time: request.date_time,
            })
            .await
            .map_err(map_domain_error)?;

        Ok(Json(map_meal(&meal)))
    }

    #[oai(path = "/meals/:meal_id", method = "delete", tag = EndpointsTags::Meals)]
    pub async fn delete_meal(
        &self,
        #[oai(name = "user-id")] user_id: Header<Option<String>>,
        meal_id: Path<String>,
    ) -> PoemResult<DeleteMealResponse> {
        let user_id = authorize(&self.state, user_id.0.as_deref()).await?;
        let meal_id = parse_meal_id(&meal_id.0).map_err(map_domain_error)?;

        self.state
            .delete_meal_usecase
            .execute(user_id, meal_id)
            .await
            .map_err(map_domain_error)?;

        Ok(DeleteMealResponse::Deleted)
    }
}
