// Code generated by handlergen. DO NOT EDIT!

#![allow(non_camel_case_types)]
use crate::HttpHandler;
pub struct Handler {
    pub path: &'static str,
    pub http_method: &'static str,
    pub handler: &'static (dyn HttpHandler + Sync),
}
pub static HANDLERS: &[Handler] = &[
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}",
        http_method: "DELETE",
        handler: &datasetsDeleteHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}",
        http_method: "GET",
        handler: &datasetsGetHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets",
        http_method: "POST",
        handler: &datasetsInsertHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets",
        http_method: "GET",
        handler: &datasetsListHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}",
        http_method: "PATCH",
        handler: &datasetsPatchHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}:undelete",
        http_method: "POST",
        handler: &datasetsUndeleteHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}",
        http_method: "PUT",
        handler: &datasetsUpdateHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/jobs/{jobsId}/cancel",
        http_method: "POST",
        handler: &jobsCancelHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/jobs/{jobsId}/delete",
        http_method: "DELETE",
        handler: &jobsDeleteHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/jobs/{jobsId}",
        http_method: "GET",
        handler: &jobsGetHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/queries/{queriesId}",
        http_method: "GET",
        handler: &jobsGetQueryResultsHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/jobs",
        http_method: "POST",
        handler: &jobsInsertHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/jobs",
        http_method: "GET",
        handler: &jobsListHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/queries",
        http_method: "POST",
        handler: &jobsQueryHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/models/{modelsId}",
        http_method: "DELETE",
        handler: &modelsDeleteHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/models/{modelsId}",
        http_method: "GET",
        handler: &modelsGetHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/models",
        http_method: "GET",
        handler: &modelsListHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/models/{modelsId}",
        http_method: "PATCH",
        handler: &modelsPatchHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/serviceAccount",
        http_method: "GET",
        handler: &projectsGetServiceAccountHandler {
        },
    },
    Handler {
        path: "/projects",
        http_method: "GET",
        handler: &projectsListHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/routines/{routinesId}",
        http_method: "DELETE",
        handler: &routinesDeleteHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/routines/{routinesId}",
        http_method: "GET",
        handler: &routinesGetHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/routines",
        http_method: "POST",
        handler: &routinesInsertHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/routines",
        http_method: "GET",
        handler: &routinesListHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/routines/{routinesId}",
        http_method: "PUT",
        handler: &routinesUpdateHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/tables/{tablesId}/rowAccessPolicies/{rowAccessPoliciesId}:getIamPolicy",
        http_method: "POST",
        handler: &rowAccessPoliciesGetIamPolicyHandler {
        },
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/tables/{tablesId}/rowAccessPolicies",
        http_method: "GET",
        handler: &rowAccessPoliciesListHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/tables/{tablesId}/rowAccessPolicies/{rowAccessPoliciesId}:testIamPermissions",
        http_method: "POST",
        handler: &rowAccessPoliciesTestIamPermissionsHandler {
        },
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/tables/{tablesId}/insertAll",
        http_method: "POST",
        handler: &tabledataInsertAllHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/tables/{tablesId}/data",
        http_method: "GET",
        handler: &tabledataListHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/tables/{tablesId}",
        http_method: "DELETE",
        handler: &tablesDeleteHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/tables/{tablesId}",
        http_method: "GET",
        handler: &tablesGetHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/tables/{tablesId}:getIamPolicy",
        http_method: "POST",
        handler: &tablesGetIamPolicyHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/tables",
        http_method: "POST",
        handler: &tablesInsertHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/tables",
        http_method: "GET",
        handler: &tablesListHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/tables/{tablesId}",
        http_method: "PATCH",
        handler: &tablesPatchHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/tables/{tablesId}:setIamPolicy",
        http_method: "POST",
        handler: &tablesSetIamPolicyHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/tables/{tablesId}:testIamPermissions",
        http_method: "POST",
        handler: &tablesTestIamPermissionsHandler {},
    },
    Handler {
        path: "/projects/{projectsId}/datasets/{datasetsId}/tables/{tablesId}",
        http_method: "PUT",
        handler: &tablesUpdateHandler {},
    },
];
const _: fn() = || {
    fn assert_handler<T: HttpHandler + Sync>() {}
    assert_handler::<datasetsDeleteHandler>();
    assert_handler::<datasetsGetHandler>();
    assert_handler::<datasetsInsertHandler>();
    assert_handler::<datasetsListHandler>();
    assert_handler::<datasetsPatchHandler>();
    assert_handler::<datasetsUndeleteHandler>();
    assert_handler::<datasetsUpdateHandler>();
    assert_handler::<jobsCancelHandler>();
    assert_handler::<jobsDeleteHandler>();
    assert_handler::<jobsGetHandler>();
    assert_handler::<jobsGetQueryResultsHandler>();
    assert_handler::<jobsInsertHandler>();
    assert_handler::<jobsListHandler>();
    assert_handler::<jobsQueryHandler>();
    assert_handler::<modelsDeleteHandler>();
    assert_handler::<modelsGetHandler>();
    assert_handler::<modelsListHandler>();
    assert_handler::<modelsPatchHandler>();
    assert_handler::<projectsGetServiceAccountHandler>();
    assert_handler::<projectsListHandler>();
    assert_handler::<routinesDeleteHandler>();
    assert_handler::<routinesGetHandler>();
    assert_handler::<routinesInsertHandler>();
    assert_handler::<routinesListHandler>();
    assert_handler::<routinesUpdateHandler>();
    assert_handler::<rowAccessPoliciesGetIamPolicyHandler>();
    assert_handler::<rowAccessPoliciesListHandler>();
    assert_handler::<rowAccessPoliciesTestIamPermissionsHandler>();
    assert_handler::<tabledataInsertAllHandler>();
    assert_handler::<tabledataListHandler>();
    assert_handler::<tablesDeleteHandler>();
    assert_handler::<tablesGetHandler>();
    assert_handler::<tablesGetIamPolicyHandler>();
    assert_handler::<tablesInsertHandler>();
    assert_handler::<tablesListHandler>();
    assert_handler::<tablesPatchHandler>();
    assert_handler::<tablesSetIamPolicyHandler>();
    assert_handler::<tablesTestIamPermissionsHandler>();
    assert_handler::<tablesUpdateHandler>();
};
pub struct datasetsDeleteHandler {}
pub struct datasetsGetHandler {}
pub struct datasetsInsertHandler {}
pub struct datasetsListHandler {}
pub struct datasetsPatchHandler {}
pub struct datasetsUndeleteHandler {}
pub struct datasetsUpdateHandler {}
pub struct jobsCancelHandler {}
pub struct jobsDeleteHandler {}
pub struct jobsGetHandler {}
pub struct jobsGetQueryResultsHandler {}
pub struct jobsInsertHandler {}
pub struct jobsListHandler {}
pub struct jobsQueryHandler {}
pub struct modelsDeleteHandler {}
pub struct modelsGetHandler {}
pub struct modelsListHandler {}
pub struct modelsPatchHandler {}
pub struct projectsGetServiceAccountHandler {}
pub struct projectsListHandler {}
pub struct routinesDeleteHandler {}
pub struct routinesGetHandler {}
pub struct routinesInsertHandler {}
pub struct routinesListHandler {}
pub struct routinesUpdateHandler {}
pub struct rowAccessPoliciesGetIamPolicyHandler {}
pub struct rowAccessPoliciesListHandler {}
pub struct rowAccessPoliciesTestIamPermissionsHandler {}
pub struct tabledataInsertAllHandler {}
pub struct tabledataListHandler {}
pub struct tablesDeleteHandler {}
pub struct tablesGetHandler {}
pub struct tablesGetIamPolicyHandler {}
pub struct tablesInsertHandler {}
pub struct tablesListHandler {}
pub struct tablesPatchHandler {}
pub struct tablesSetIamPolicyHandler {}
pub struct tablesTestIamPermissionsHandler {}
pub struct tablesUpdateHandler {}
