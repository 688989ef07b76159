/*
 * Responsibility
 * - GET /me: 解決済みの caller / client identity を返す
 * - public でない request に caller がいなければ 401
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::CallerCtx;
use crate::error::RestErr;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub caller_id: i64,
    pub client_id: i64,
    pub public: bool,
}

pub async fn me(ctx: CallerCtx) -> Result<Json<MeResponse>, RestErr> {
    if ctx.is_anonymous() && !ctx.public {
        return Err(RestErr::unauthorized("a valid access token is required"));
    }

    Ok(Json(MeResponse {
        caller_id: ctx.caller_id,
        client_id: ctx.client_id,
        public: ctx.public,
    }))
}
