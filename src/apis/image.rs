use super::{check_sparsity, json_body};
use crate::core::{decode_json, ApiInvoker, ApiRequest, QueryParams, Result};
use crate::domain::model::{Expression, Image, ImageOptions};
use crate::domain::ports::Accept;
use crate::utils::validation::{require_non_empty, require_param, validate_positive_number};

pub struct ImageApi<I: ApiInvoker> {
    invoker: I,
}

fn image_query(retina_name: &str, options: &ImageOptions) -> Result<QueryParams> {
    check_sparsity(options.sparsity)?;
    if let Some(scalar) = options.image_scalar {
        validate_positive_number("image_scalar", scalar as u64, 1)?;
    }

    Ok(QueryParams::new()
        .retina(retina_name)
        .push_opt("image_scalar", options.image_scalar)
        .push_opt("plot_shape", options.plot_shape)
        .push_opt("image_encoding", options.image_encoding)
        .push_opt("sparsity", options.sparsity))
}

impl<I: ApiInvoker> ImageApi<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    /// 回傳原始影像位元組（PNG，或依 `image_encoding` 為 base64 文字）
    pub async fn get_image_for_expression(
        &self,
        retina_name: &str,
        expression: &Expression,
        options: ImageOptions,
    ) -> Result<Option<Vec<u8>>> {
        let retina_name = require_param("retina_name", retina_name)?;
        let query = image_query(retina_name, &options)?;

        let request = ApiRequest::post("/image", json_body(expression)?)
            .with_query(query.into_pairs())
            .accept(Accept::Png);
        self.invoker.invoke(request).await
    }

    /// 兩個運算式的指紋疊圖
    pub async fn get_overlay_image(
        &self,
        retina_name: &str,
        left: &Expression,
        right: &Expression,
        options: ImageOptions,
    ) -> Result<Option<Vec<u8>>> {
        let retina_name = require_param("retina_name", retina_name)?;
        // 疊圖端點不接受 sparsity
        let options = ImageOptions {
            sparsity: None,
            ..options
        };
        let query = image_query(retina_name, &options)?;

        let request = ApiRequest::post("/image/compare", json_body(&[left, right])?)
            .with_query(query.into_pairs())
            .accept(Accept::Png);
        self.invoker.invoke(request).await
    }

    pub async fn get_images_for_bulk_expressions(
        &self,
        retina_name: &str,
        expressions: &[Expression],
        get_fingerprint: Option<bool>,
        options: ImageOptions,
    ) -> Result<Option<Vec<Image>>> {
        let retina_name = require_param("retina_name", retina_name)?;
        let expressions = require_non_empty("body", expressions)?;
        let options = ImageOptions {
            image_encoding: None,
            ..options
        };
        let query = image_query(retina_name, &options)?.push_opt("get_fingerprint", get_fingerprint);

        let request =
            ApiRequest::post("/image/bulk", json_body(expressions)?).with_query(query.into_pairs());
        decode_json(self.invoker.invoke(request).await?)
    }
}
