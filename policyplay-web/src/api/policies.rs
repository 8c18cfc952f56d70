use super::ApiClient;
use policyplay_core::endpoint::paths;
use policyplay_core::{
    ApiError, DraftAnalysis, DraftAnalysisRequest, PolicySummary, StructuredPolicy,
    is_supported_upload,
};

impl ApiClient {
    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn policies(&self) -> Result<Vec<PolicySummary>, ApiError> {
        self.get(paths::POLICIES).await
    }

    /// Upload a policy document as the multipart `file` field.
    ///
    /// # Errors
    ///
    /// Rejects unsupported extensions before any request is made.
    pub async fn upload_policy(&self, file: &web_sys::File) -> Result<StructuredPolicy, ApiError> {
        let name = file.name();
        if !is_supported_upload(&name) {
            return Err(ApiError::Invalid(crate::i18n::t("upload.unsupported")));
        }
        let form = web_sys::FormData::new()
            .map_err(|err| ApiError::Invalid(crate::dom::js_error_message(&err)))?;
        form.append_with_blob_and_filename("file", file, &name)
            .map_err(|err| ApiError::Invalid(crate::dom::js_error_message(&err)))?;
        log::info!("uploading {name} ({} bytes)", file.size());
        self.post_form(paths::POLICY_UPLOAD, form).await
    }

    /// # Errors
    ///
    /// Propagates transport and backend failures.
    pub async fn analyze_draft(
        &self,
        request: &DraftAnalysisRequest,
    ) -> Result<DraftAnalysis, ApiError> {
        self.post(paths::POLICY_ANALYZE, request).await
    }
}
