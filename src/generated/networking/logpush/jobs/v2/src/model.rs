// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// A Logpush job.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LogpushJobPack {
    /// The job identifier.
    pub id: i64,

    /// The job name.
    pub name: std::option::Option<std::string::String>,

    /// Whether the job is enabled.
    pub enabled: bool,

    /// The dataset pushed by this job.
    pub dataset: std::option::Option<std::string::String>,

    /// How often the logs are pushed.
    pub frequency: std::option::Option<std::string::String>,

    /// Configuration string for the log fields, format and timestamps.
    pub logpull_options: std::option::Option<std::string::String>,

    /// The destination URI of the job.
    pub destination_conf: std::option::Option<std::string::String>,

    /// The last time the job pushed logs successfully.
    pub last_complete: std::option::Option<std::string::String>,

    /// The last time the job failed.
    pub last_error: std::option::Option<std::string::String>,

    /// The message of the last failure.
    pub error_message: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogpushJobPack {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::LogpushJobPack::id].
    pub fn set_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::LogpushJobPack::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::LogpushJobPack::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enabled][crate::model::LogpushJobPack::enabled].
    pub fn set_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.enabled = v.into();
        self
    }

    /// Sets the value of [dataset][crate::model::LogpushJobPack::dataset].
    pub fn set_dataset<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.dataset = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [dataset][crate::model::LogpushJobPack::dataset].
    pub fn set_or_clear_dataset<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.dataset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [frequency][crate::model::LogpushJobPack::frequency].
    pub fn set_frequency<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.frequency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [frequency][crate::model::LogpushJobPack::frequency].
    pub fn set_or_clear_frequency<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.frequency = v.map(|x| x.into());
        self
    }

    /// Sets the value of [logpull_options][crate::model::LogpushJobPack::logpull_options].
    pub fn set_logpull_options<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.logpull_options = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [logpull_options][crate::model::LogpushJobPack::logpull_options].
    pub fn set_or_clear_logpull_options<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.logpull_options = v.map(|x| x.into());
        self
    }

    /// Sets the value of [destination_conf][crate::model::LogpushJobPack::destination_conf].
    pub fn set_destination_conf<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.destination_conf = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [destination_conf][crate::model::LogpushJobPack::destination_conf].
    pub fn set_or_clear_destination_conf<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.destination_conf = v.map(|x| x.into());
        self
    }

    /// Sets the value of [last_complete][crate::model::LogpushJobPack::last_complete].
    pub fn set_last_complete<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_complete = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [last_complete][crate::model::LogpushJobPack::last_complete].
    pub fn set_or_clear_last_complete<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_complete = v.map(|x| x.into());
        self
    }

    /// Sets the value of [last_error][crate::model::LogpushJobPack::last_error].
    pub fn set_last_error<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_error = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [last_error][crate::model::LogpushJobPack::last_error].
    pub fn set_or_clear_last_error<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_error = v.map(|x| x.into());
        self
    }

    /// Sets the value of [error_message][crate::model::LogpushJobPack::error_message].
    pub fn set_error_message<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.error_message = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [error_message][crate::model::LogpushJobPack::error_message].
    pub fn set_or_clear_error_message<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.error_message = v.map(|x| x.into());
        self
    }
}

/// The response to operations returning a single Logpush job.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LogpushJobsResp {
    /// Operation success flag.
    pub success: bool,

    /// The errors reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub errors: std::vec::Vec<serde_json::Value>,

    /// The informational messages reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub messages: std::vec::Vec<serde_json::Value>,

    /// The job.
    pub result: std::option::Option<crate::model::LogpushJobPack>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LogpushJobsResp {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [success][crate::model::LogpushJobsResp::success].
    pub fn set_success<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.success = v.into();
        self
    }

    /// Sets the value of [errors][crate::model::LogpushJobsResp::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.errors = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [messages][crate::model::LogpushJobsResp::messages].
    pub fn set_messages<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.messages = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [result][crate::model::LogpushJobsResp::result].
    pub fn set_result<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LogpushJobPack>,
    {
        self.result = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [result][crate::model::LogpushJobsResp::result].
    pub fn set_or_clear_result<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::LogpushJobPack>,
    {
        self.result = v.map(|x| x.into());
        self
    }
}

/// The response to operations listing Logpush jobs.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListLogpushJobsResp {
    /// Operation success flag.
    pub success: bool,

    /// The errors reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub errors: std::vec::Vec<serde_json::Value>,

    /// The informational messages reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub messages: std::vec::Vec<serde_json::Value>,

    /// The jobs.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub result: std::vec::Vec<crate::model::LogpushJobPack>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListLogpushJobsResp {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [success][crate::model::ListLogpushJobsResp::success].
    pub fn set_success<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.success = v.into();
        self
    }

    /// Sets the value of [errors][crate::model::ListLogpushJobsResp::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.errors = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [messages][crate::model::ListLogpushJobsResp::messages].
    pub fn set_messages<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.messages = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [result][crate::model::ListLogpushJobsResp::result].
    pub fn set_result<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LogpushJobPack>,
    {
        use std::iter::Iterator;
        self.result = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response to deleting a Logpush job.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteLogpushJobResp {
    /// Operation success flag.
    pub success: bool,

    /// The errors reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub errors: std::vec::Vec<serde_json::Value>,

    /// The informational messages reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub messages: std::vec::Vec<serde_json::Value>,

    /// An empty object on success.
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub result: serde_json::Map<std::string::String, serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteLogpushJobResp {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [success][crate::model::DeleteLogpushJobResp::success].
    pub fn set_success<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.success = v.into();
        self
    }

    /// Sets the value of [errors][crate::model::DeleteLogpushJobResp::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.errors = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [messages][crate::model::DeleteLogpushJobResp::messages].
    pub fn set_messages<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.messages = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [result][crate::model::DeleteLogpushJobResp::result].
    pub fn set_result<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.result = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The fields available in a dataset.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListFieldsResp {
    /// Operation success flag.
    pub success: bool,

    /// The errors reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub errors: std::vec::Vec<serde_json::Value>,

    /// The informational messages reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub messages: std::vec::Vec<serde_json::Value>,

    /// Maps each field name to its description.
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub result: serde_json::Map<std::string::String, serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListFieldsResp {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [success][crate::model::ListFieldsResp::success].
    pub fn set_success<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.success = v.into();
        self
    }

    /// Sets the value of [errors][crate::model::ListFieldsResp::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.errors = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [messages][crate::model::ListFieldsResp::messages].
    pub fn set_messages<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.messages = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [result][crate::model::ListFieldsResp::result].
    pub fn set_result<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.result = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The response to requesting an ownership challenge.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct OwnershipChallengeResp {
    /// Operation success flag.
    pub success: bool,

    /// The errors reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub errors: std::vec::Vec<serde_json::Value>,

    /// The informational messages reported by the service.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub messages: std::vec::Vec<serde_json::Value>,

    /// Where the challenge token was written.
    pub result: std::option::Option<crate::model::OwnershipChallengeResult>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl OwnershipChallengeResp {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [success][crate::model::OwnershipChallengeResp::success].
    pub fn set_success<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.success = v.into();
        self
    }

    /// Sets the value of [errors][crate::model::OwnershipChallengeResp::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.errors = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [messages][crate::model::OwnershipChallengeResp::messages].
    pub fn set_messages<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.messages = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [result][crate::model::OwnershipChallengeResp::result].
    pub fn set_result<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::OwnershipChallengeResult>,
    {
        self.result = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [result][crate::model::OwnershipChallengeResp::result].
    pub fn set_or_clear_result<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::OwnershipChallengeResult>,
    {
        self.result = v.map(|x| x.into());
        self
    }
}

/// Describes the ownership challenge written to a destination.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct OwnershipChallengeResult {
    /// The name of the file, in the destination, that contains the challenge token.
    pub filename: std::option::Option<std::string::String>,

    /// A message from the service.
    pub message: std::option::Option<std::string::String>,

    /// Whether the destination is valid.
    pub valid: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl OwnershipChallengeResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [filename][crate::model::OwnershipChallengeResult::filename].
    pub fn set_filename<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.filename = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [filename][crate::model::OwnershipChallengeResult::filename].
    pub fn set_or_clear_filename<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.filename = v.map(|x| x.into());
        self
    }

    /// Sets the value of [message][crate::model::OwnershipChallengeResult::message].
    pub fn set_message<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.message = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [message][crate::model::OwnershipChallengeResult::message].
    pub fn set_or_clear_message<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.message = v.map(|x| x.into());
        self
    }

    /// Sets the value of [valid][crate::model::OwnershipChallengeResult::valid].
    pub fn set_valid<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.valid = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [valid][crate::model::OwnershipChallengeResult::valid].
    pub fn set_or_clear_valid<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.valid = v.map(|x| x.into());
        self
    }
}

/// The result of validating an ownership challenge.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct OwnershipChallengeValidateResult {
    /// Whether the challenge token is valid for the destination.
    pub valid: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl OwnershipChallengeValidateResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [valid][crate::model::OwnershipChallengeValidateResult::valid].
    pub fn set_valid<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.valid = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [valid][crate::model::OwnershipChallengeValidateResult::valid].
    pub fn set_or_clear_valid<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.valid = v.map(|x| x.into());
        self
    }
}

/// An IBM Cloud Logs instance used as a Logpush destination.
///
/// All the fields are required.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct LogpushJobIbmclReq {
    /// The GUID of the IBM Cloud Logs instance.
    pub instance_id: std::string::String,

    /// The region of the IBM Cloud Logs instance.
    pub region: std::string::String,

    /// An IBM Cloud API key with permission to send logs to the instance.
    pub api_key: std::string::String,
}

impl LogpushJobIbmclReq {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instance_id][crate::model::LogpushJobIbmclReq::instance_id].
    pub fn set_instance_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }

    /// Sets the value of [region][crate::model::LogpushJobIbmclReq::region].
    pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    /// Sets the value of [api_key][crate::model::LogpushJobIbmclReq::api_key].
    pub fn set_api_key<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.api_key = v.into();
        self
    }
}

/// Creates a job pushing logs to a Cloud Object Storage bucket.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct CreateLogpushJobCosV2Request {
    /// The Cloud Object Storage bucket configuration.
    ///
    /// For example, `{"bucket_name": "logs", "id": "...", "region": "us-south"}`.
    pub cos: serde_json::Map<std::string::String, serde_json::Value>,

    /// The ownership challenge token, see [LogpushJobs::get_logpush_ownership_v2][crate::client::LogpushJobs::get_logpush_ownership_v2].
    pub ownership_challenge: std::string::String,

    /// The Logpush job name.
    ///
    /// It can only contain letters, numbers, dashes, underscores, and dots.
    pub name: std::option::Option<std::string::String>,

    /// Whether the job is enabled.
    pub enabled: std::option::Option<bool>,

    /// Configuration string for the log fields, format and timestamps.
    ///
    /// For example, `fields=RayID,ClientIP,EdgeStartTimestamp&timestamps=rfc3339`.
    pub logpull_options: std::option::Option<std::string::String>,

    /// The dataset to push.
    ///
    /// See [dataset][crate::model::dataset] for the known values.
    pub dataset: std::option::Option<std::string::String>,

    /// How often the logs are pushed.
    ///
    /// See [frequency][crate::model::frequency] for the known values.
    pub frequency: std::option::Option<std::string::String>,
}

impl CreateLogpushJobCosV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cos][crate::model::CreateLogpushJobCosV2Request::cos].
    pub fn set_cos<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.cos = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [ownership_challenge][crate::model::CreateLogpushJobCosV2Request::ownership_challenge].
    pub fn set_ownership_challenge<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.ownership_challenge = v.into();
        self
    }

    /// Sets the value of [name][crate::model::CreateLogpushJobCosV2Request::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::CreateLogpushJobCosV2Request::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enabled][crate::model::CreateLogpushJobCosV2Request::enabled].
    pub fn set_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][crate::model::CreateLogpushJobCosV2Request::enabled].
    pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [logpull_options][crate::model::CreateLogpushJobCosV2Request::logpull_options].
    pub fn set_logpull_options<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.logpull_options = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [logpull_options][crate::model::CreateLogpushJobCosV2Request::logpull_options].
    pub fn set_or_clear_logpull_options<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.logpull_options = v.map(|x| x.into());
        self
    }

    /// Sets the value of [dataset][crate::model::CreateLogpushJobCosV2Request::dataset].
    pub fn set_dataset<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.dataset = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [dataset][crate::model::CreateLogpushJobCosV2Request::dataset].
    pub fn set_or_clear_dataset<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.dataset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [frequency][crate::model::CreateLogpushJobCosV2Request::frequency].
    pub fn set_frequency<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.frequency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [frequency][crate::model::CreateLogpushJobCosV2Request::frequency].
    pub fn set_or_clear_frequency<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.frequency = v.map(|x| x.into());
        self
    }
}

/// Creates a job pushing logs to a destination URI.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct CreateLogpushJobGenericV2Request {
    /// The destination URI, for example `cos://bucket?region=us-south&instance-id=...`.
    pub destination_conf: std::string::String,

    /// The Logpush job name.
    ///
    /// It can only contain letters, numbers, dashes, underscores, and dots.
    pub name: std::option::Option<std::string::String>,

    /// Whether the job is enabled.
    pub enabled: std::option::Option<bool>,

    /// Configuration string for the log fields, format and timestamps.
    ///
    /// For example, `fields=RayID,ClientIP,EdgeStartTimestamp&timestamps=rfc3339`.
    pub logpull_options: std::option::Option<std::string::String>,

    /// The dataset to push.
    ///
    /// See [dataset][crate::model::dataset] for the known values.
    pub dataset: std::option::Option<std::string::String>,

    /// How often the logs are pushed.
    ///
    /// See [frequency][crate::model::frequency] for the known values.
    pub frequency: std::option::Option<std::string::String>,
}

impl CreateLogpushJobGenericV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [destination_conf][crate::model::CreateLogpushJobGenericV2Request::destination_conf].
    pub fn set_destination_conf<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.destination_conf = v.into();
        self
    }

    /// Sets the value of [name][crate::model::CreateLogpushJobGenericV2Request::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::CreateLogpushJobGenericV2Request::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enabled][crate::model::CreateLogpushJobGenericV2Request::enabled].
    pub fn set_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][crate::model::CreateLogpushJobGenericV2Request::enabled].
    pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [logpull_options][crate::model::CreateLogpushJobGenericV2Request::logpull_options].
    pub fn set_logpull_options<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.logpull_options = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [logpull_options][crate::model::CreateLogpushJobGenericV2Request::logpull_options].
    pub fn set_or_clear_logpull_options<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.logpull_options = v.map(|x| x.into());
        self
    }

    /// Sets the value of [dataset][crate::model::CreateLogpushJobGenericV2Request::dataset].
    pub fn set_dataset<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.dataset = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [dataset][crate::model::CreateLogpushJobGenericV2Request::dataset].
    pub fn set_or_clear_dataset<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.dataset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [frequency][crate::model::CreateLogpushJobGenericV2Request::frequency].
    pub fn set_frequency<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.frequency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [frequency][crate::model::CreateLogpushJobGenericV2Request::frequency].
    pub fn set_or_clear_frequency<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.frequency = v.map(|x| x.into());
        self
    }
}

/// Creates a job pushing logs to an IBM Cloud Logs instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct CreateLogpushJobIbmclV2Request {
    /// The IBM Cloud Logs instance.
    pub ibmcl: crate::model::LogpushJobIbmclReq,

    /// The Logpush job name.
    ///
    /// It can only contain letters, numbers, dashes, underscores, and dots.
    pub name: std::option::Option<std::string::String>,

    /// Whether the job is enabled.
    pub enabled: std::option::Option<bool>,

    /// Configuration string for the log fields, format and timestamps.
    ///
    /// For example, `fields=RayID,ClientIP,EdgeStartTimestamp&timestamps=rfc3339`.
    pub logpull_options: std::option::Option<std::string::String>,

    /// The dataset to push.
    ///
    /// See [dataset][crate::model::dataset] for the known values.
    pub dataset: std::option::Option<std::string::String>,

    /// How often the logs are pushed.
    ///
    /// See [frequency][crate::model::frequency] for the known values.
    pub frequency: std::option::Option<std::string::String>,
}

impl CreateLogpushJobIbmclV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ibmcl][crate::model::CreateLogpushJobIbmclV2Request::ibmcl].
    pub fn set_ibmcl<T: std::convert::Into<crate::model::LogpushJobIbmclReq>>(
        mut self,
        v: T,
    ) -> Self {
        self.ibmcl = v.into();
        self
    }

    /// Sets the value of [name][crate::model::CreateLogpushJobIbmclV2Request::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::CreateLogpushJobIbmclV2Request::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enabled][crate::model::CreateLogpushJobIbmclV2Request::enabled].
    pub fn set_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][crate::model::CreateLogpushJobIbmclV2Request::enabled].
    pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [logpull_options][crate::model::CreateLogpushJobIbmclV2Request::logpull_options].
    pub fn set_logpull_options<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.logpull_options = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [logpull_options][crate::model::CreateLogpushJobIbmclV2Request::logpull_options].
    pub fn set_or_clear_logpull_options<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.logpull_options = v.map(|x| x.into());
        self
    }

    /// Sets the value of [dataset][crate::model::CreateLogpushJobIbmclV2Request::dataset].
    pub fn set_dataset<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.dataset = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [dataset][crate::model::CreateLogpushJobIbmclV2Request::dataset].
    pub fn set_or_clear_dataset<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.dataset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [frequency][crate::model::CreateLogpushJobIbmclV2Request::frequency].
    pub fn set_frequency<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.frequency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [frequency][crate::model::CreateLogpushJobIbmclV2Request::frequency].
    pub fn set_or_clear_frequency<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.frequency = v.map(|x| x.into());
        self
    }
}

/// Creates a job pushing logs to a LogDNA instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct CreateLogpushJobLogdnaV2Request {
    /// The LogDNA instance configuration.
    pub logdna: serde_json::Map<std::string::String, serde_json::Value>,

    /// The Logpush job name.
    ///
    /// It can only contain letters, numbers, dashes, underscores, and dots.
    pub name: std::option::Option<std::string::String>,

    /// Whether the job is enabled.
    pub enabled: std::option::Option<bool>,

    /// Configuration string for the log fields, format and timestamps.
    ///
    /// For example, `fields=RayID,ClientIP,EdgeStartTimestamp&timestamps=rfc3339`.
    pub logpull_options: std::option::Option<std::string::String>,

    /// The dataset to push.
    ///
    /// See [dataset][crate::model::dataset] for the known values.
    pub dataset: std::option::Option<std::string::String>,

    /// How often the logs are pushed.
    ///
    /// See [frequency][crate::model::frequency] for the known values.
    pub frequency: std::option::Option<std::string::String>,
}

impl CreateLogpushJobLogdnaV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [logdna][crate::model::CreateLogpushJobLogdnaV2Request::logdna].
    pub fn set_logdna<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.logdna = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [name][crate::model::CreateLogpushJobLogdnaV2Request::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::CreateLogpushJobLogdnaV2Request::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enabled][crate::model::CreateLogpushJobLogdnaV2Request::enabled].
    pub fn set_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][crate::model::CreateLogpushJobLogdnaV2Request::enabled].
    pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [logpull_options][crate::model::CreateLogpushJobLogdnaV2Request::logpull_options].
    pub fn set_logpull_options<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.logpull_options = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [logpull_options][crate::model::CreateLogpushJobLogdnaV2Request::logpull_options].
    pub fn set_or_clear_logpull_options<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.logpull_options = v.map(|x| x.into());
        self
    }

    /// Sets the value of [dataset][crate::model::CreateLogpushJobLogdnaV2Request::dataset].
    pub fn set_dataset<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.dataset = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [dataset][crate::model::CreateLogpushJobLogdnaV2Request::dataset].
    pub fn set_or_clear_dataset<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.dataset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [frequency][crate::model::CreateLogpushJobLogdnaV2Request::frequency].
    pub fn set_frequency<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.frequency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [frequency][crate::model::CreateLogpushJobLogdnaV2Request::frequency].
    pub fn set_or_clear_frequency<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.frequency = v.map(|x| x.into());
        self
    }
}

/// Updates a job pushing logs to a Cloud Object Storage bucket.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateLogpushJobCosV2Request {
    /// The Cloud Object Storage bucket configuration.
    ///
    /// For example, `{"bucket_name": "logs", "id": "...", "region": "us-south"}`.
    pub cos: serde_json::Map<std::string::String, serde_json::Value>,

    /// The ownership challenge token for the new bucket.
    pub ownership_challenge: std::option::Option<std::string::String>,

    /// Whether the job is enabled.
    pub enabled: std::option::Option<bool>,

    /// Configuration string for the log fields, format and timestamps.
    ///
    /// For example, `fields=RayID,ClientIP,EdgeStartTimestamp&timestamps=rfc3339`.
    pub logpull_options: std::option::Option<std::string::String>,

    /// How often the logs are pushed.
    ///
    /// See [frequency][crate::model::frequency] for the known values.
    pub frequency: std::option::Option<std::string::String>,
}

impl UpdateLogpushJobCosV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cos][crate::model::UpdateLogpushJobCosV2Request::cos].
    pub fn set_cos<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.cos = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [ownership_challenge][crate::model::UpdateLogpushJobCosV2Request::ownership_challenge].
    pub fn set_ownership_challenge<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ownership_challenge = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ownership_challenge][crate::model::UpdateLogpushJobCosV2Request::ownership_challenge].
    pub fn set_or_clear_ownership_challenge<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ownership_challenge = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enabled][crate::model::UpdateLogpushJobCosV2Request::enabled].
    pub fn set_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][crate::model::UpdateLogpushJobCosV2Request::enabled].
    pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [logpull_options][crate::model::UpdateLogpushJobCosV2Request::logpull_options].
    pub fn set_logpull_options<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.logpull_options = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [logpull_options][crate::model::UpdateLogpushJobCosV2Request::logpull_options].
    pub fn set_or_clear_logpull_options<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.logpull_options = v.map(|x| x.into());
        self
    }

    /// Sets the value of [frequency][crate::model::UpdateLogpushJobCosV2Request::frequency].
    pub fn set_frequency<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.frequency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [frequency][crate::model::UpdateLogpushJobCosV2Request::frequency].
    pub fn set_or_clear_frequency<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.frequency = v.map(|x| x.into());
        self
    }
}

/// Updates a job pushing logs to a destination URI.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateLogpushJobGenericV2Request {
    /// The destination URI, for example `cos://bucket?region=us-south&instance-id=...`.
    pub destination_conf: std::string::String,

    /// Whether the job is enabled.
    pub enabled: std::option::Option<bool>,

    /// Configuration string for the log fields, format and timestamps.
    ///
    /// For example, `fields=RayID,ClientIP,EdgeStartTimestamp&timestamps=rfc3339`.
    pub logpull_options: std::option::Option<std::string::String>,

    /// How often the logs are pushed.
    ///
    /// See [frequency][crate::model::frequency] for the known values.
    pub frequency: std::option::Option<std::string::String>,
}

impl UpdateLogpushJobGenericV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [destination_conf][crate::model::UpdateLogpushJobGenericV2Request::destination_conf].
    pub fn set_destination_conf<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.destination_conf = v.into();
        self
    }

    /// Sets the value of [enabled][crate::model::UpdateLogpushJobGenericV2Request::enabled].
    pub fn set_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][crate::model::UpdateLogpushJobGenericV2Request::enabled].
    pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [logpull_options][crate::model::UpdateLogpushJobGenericV2Request::logpull_options].
    pub fn set_logpull_options<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.logpull_options = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [logpull_options][crate::model::UpdateLogpushJobGenericV2Request::logpull_options].
    pub fn set_or_clear_logpull_options<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.logpull_options = v.map(|x| x.into());
        self
    }

    /// Sets the value of [frequency][crate::model::UpdateLogpushJobGenericV2Request::frequency].
    pub fn set_frequency<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.frequency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [frequency][crate::model::UpdateLogpushJobGenericV2Request::frequency].
    pub fn set_or_clear_frequency<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.frequency = v.map(|x| x.into());
        self
    }
}

/// Updates a job pushing logs to an IBM Cloud Logs instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateLogpushJobIbmclV2Request {
    /// The IBM Cloud Logs instance.
    pub ibmcl: crate::model::LogpushJobIbmclReq,

    /// Whether the job is enabled.
    pub enabled: std::option::Option<bool>,

    /// Configuration string for the log fields, format and timestamps.
    ///
    /// For example, `fields=RayID,ClientIP,EdgeStartTimestamp&timestamps=rfc3339`.
    pub logpull_options: std::option::Option<std::string::String>,

    /// How often the logs are pushed.
    ///
    /// See [frequency][crate::model::frequency] for the known values.
    pub frequency: std::option::Option<std::string::String>,
}

impl UpdateLogpushJobIbmclV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ibmcl][crate::model::UpdateLogpushJobIbmclV2Request::ibmcl].
    pub fn set_ibmcl<T: std::convert::Into<crate::model::LogpushJobIbmclReq>>(
        mut self,
        v: T,
    ) -> Self {
        self.ibmcl = v.into();
        self
    }

    /// Sets the value of [enabled][crate::model::UpdateLogpushJobIbmclV2Request::enabled].
    pub fn set_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][crate::model::UpdateLogpushJobIbmclV2Request::enabled].
    pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [logpull_options][crate::model::UpdateLogpushJobIbmclV2Request::logpull_options].
    pub fn set_logpull_options<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.logpull_options = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [logpull_options][crate::model::UpdateLogpushJobIbmclV2Request::logpull_options].
    pub fn set_or_clear_logpull_options<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.logpull_options = v.map(|x| x.into());
        self
    }

    /// Sets the value of [frequency][crate::model::UpdateLogpushJobIbmclV2Request::frequency].
    pub fn set_frequency<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.frequency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [frequency][crate::model::UpdateLogpushJobIbmclV2Request::frequency].
    pub fn set_or_clear_frequency<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.frequency = v.map(|x| x.into());
        self
    }
}

/// Updates a job pushing logs to a LogDNA instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateLogpushJobLogdnaV2Request {
    /// The LogDNA instance configuration.
    pub logdna: serde_json::Map<std::string::String, serde_json::Value>,

    /// Whether the job is enabled.
    pub enabled: std::option::Option<bool>,

    /// Configuration string for the log fields, format and timestamps.
    ///
    /// For example, `fields=RayID,ClientIP,EdgeStartTimestamp&timestamps=rfc3339`.
    pub logpull_options: std::option::Option<std::string::String>,

    /// How often the logs are pushed.
    ///
    /// See [frequency][crate::model::frequency] for the known values.
    pub frequency: std::option::Option<std::string::String>,
}

impl UpdateLogpushJobLogdnaV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [logdna][crate::model::UpdateLogpushJobLogdnaV2Request::logdna].
    pub fn set_logdna<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.logdna = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [enabled][crate::model::UpdateLogpushJobLogdnaV2Request::enabled].
    pub fn set_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][crate::model::UpdateLogpushJobLogdnaV2Request::enabled].
    pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [logpull_options][crate::model::UpdateLogpushJobLogdnaV2Request::logpull_options].
    pub fn set_logpull_options<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.logpull_options = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [logpull_options][crate::model::UpdateLogpushJobLogdnaV2Request::logpull_options].
    pub fn set_or_clear_logpull_options<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.logpull_options = v.map(|x| x.into());
        self
    }

    /// Sets the value of [frequency][crate::model::UpdateLogpushJobLogdnaV2Request::frequency].
    pub fn set_frequency<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.frequency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [frequency][crate::model::UpdateLogpushJobLogdnaV2Request::frequency].
    pub fn set_or_clear_frequency<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.frequency = v.map(|x| x.into());
        self
    }
}

/// The known values for the `dataset` of a Logpush job.
pub mod dataset {
    pub const HTTP_REQUESTS: &str = "http_requests";
    pub const RANGE_EVENTS: &str = "range_events";
    pub const FIREWALL_EVENTS: &str = "firewall_events";
    pub const DNS_LOGS: &str = "dns_logs";
}

/// The known values for the `frequency` of a Logpush job.
pub mod frequency {
    pub const HIGH: &str = "high";
    pub const LOW: &str = "low";
}

/// The payload to create a Logpush job.
///
/// Each variant pushes the logs to a different kind of destination. In JSON
/// the variant is identified by the destination field present in the
/// object: `cos`, `destination_conf`, `ibmcl`, or `logdna`. Objects with
/// more than one destination are rejected.
///
/// # Example
/// ```
/// # use ibm_cloud_networking_logpush_jobs_v2::model::*;
/// let job = CreateLogpushJobV2Request::from(
///     CreateLogpushJobGenericV2Request::new()
///         .set_destination_conf("cos://logs?region=us-south&instance-id=abc")
///         .set_name("my-job")
///         .set_dataset(dataset::HTTP_REQUESTS),
/// );
/// let json = job.encode()?;
/// assert_eq!(json["name"], "my-job");
/// assert!(json.get("cos").is_none());
/// assert_eq!(CreateLogpushJobV2Request::decode(json)?, job);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum CreateLogpushJobV2Request {
    /// A Cloud Object Storage bucket.
    Cos(CreateLogpushJobCosV2Request),
    /// A destination URI.
    Generic(CreateLogpushJobGenericV2Request),
    /// An IBM Cloud Logs instance.
    IbmCloudLogs(CreateLogpushJobIbmclV2Request),
    /// A LogDNA instance.
    Logdna(CreateLogpushJobLogdnaV2Request),
}

impl CreateLogpushJobV2Request {
    const NAME: &'static str = "CreateLogpushJobV2Request";
    const VARIANTS: &'static [gax::one_of::Variant] = &[
        gax::one_of::Variant::new("cos").with_exclusive(&["ownership_challenge"]),
        gax::one_of::Variant::new("destination_conf"),
        gax::one_of::Variant::new("ibmcl"),
        gax::one_of::Variant::new("logdna"),
    ];

    /// Decodes a JSON object into the variant for its destination field.
    pub fn decode(value: serde_json::Value) -> std::result::Result<Self, gax::one_of::OneOfError> {
        use gax::one_of::{as_object, decode, select};
        type Object = serde_json::Map<std::string::String, serde_json::Value>;
        let object = as_object(Self::NAME, Self::VARIANTS, &value)?;
        let index = select(Self::NAME, object, Self::VARIANTS)?;
        let variant = &Self::VARIANTS[index];
        match index {
            0 => decode::<_, Object>(Self::NAME, variant, value).map(Self::Cos),
            1 => decode::<_, std::string::String>(Self::NAME, variant, value).map(Self::Generic),
            2 => decode::<_, LogpushJobIbmclReq>(Self::NAME, variant, value)
                .map(Self::IbmCloudLogs),
            _ => decode::<_, Object>(Self::NAME, variant, value).map(Self::Logdna),
        }
    }

    /// Encodes the variant as a JSON object.
    ///
    /// The object contains the shared fields that are set, and only the
    /// destination fields of this variant.
    pub fn encode(&self) -> std::result::Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl serde::ser::Serialize for CreateLogpushJobV2Request {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            Self::Cos(v) => v.serialize(serializer),
            Self::Generic(v) => v.serialize(serializer),
            Self::IbmCloudLogs(v) => v.serialize(serializer),
            Self::Logdna(v) => v.serialize(serializer),
        }
    }
}

impl<'de> serde::de::Deserialize<'de> for CreateLogpushJobV2Request {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::decode(value).map_err(D::Error::custom)
    }
}

impl std::convert::From<CreateLogpushJobCosV2Request> for CreateLogpushJobV2Request {
    fn from(value: CreateLogpushJobCosV2Request) -> Self {
        Self::Cos(value)
    }
}

impl std::convert::From<CreateLogpushJobGenericV2Request> for CreateLogpushJobV2Request {
    fn from(value: CreateLogpushJobGenericV2Request) -> Self {
        Self::Generic(value)
    }
}

impl std::convert::From<CreateLogpushJobIbmclV2Request> for CreateLogpushJobV2Request {
    fn from(value: CreateLogpushJobIbmclV2Request) -> Self {
        Self::IbmCloudLogs(value)
    }
}

impl std::convert::From<CreateLogpushJobLogdnaV2Request> for CreateLogpushJobV2Request {
    fn from(value: CreateLogpushJobLogdnaV2Request) -> Self {
        Self::Logdna(value)
    }
}

/// The payload to update a Logpush job.
///
/// Each variant pushes the logs to a different kind of destination. In JSON
/// the variant is identified by the destination field present in the
/// object: `cos`, `destination_conf`, `ibmcl`, or `logdna`. Objects with
/// more than one destination are rejected.
///
/// The `name` and `dataset` of a job cannot change, the update payloads
/// do not include them.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum UpdateLogpushJobV2Request {
    /// A Cloud Object Storage bucket.
    Cos(UpdateLogpushJobCosV2Request),
    /// A destination URI.
    Generic(UpdateLogpushJobGenericV2Request),
    /// An IBM Cloud Logs instance.
    IbmCloudLogs(UpdateLogpushJobIbmclV2Request),
    /// A LogDNA instance.
    Logdna(UpdateLogpushJobLogdnaV2Request),
}

impl UpdateLogpushJobV2Request {
    const NAME: &'static str = "UpdateLogpushJobV2Request";
    const VARIANTS: &'static [gax::one_of::Variant] = &[
        gax::one_of::Variant::new("cos").with_exclusive(&["ownership_challenge"]),
        gax::one_of::Variant::new("destination_conf"),
        gax::one_of::Variant::new("ibmcl"),
        gax::one_of::Variant::new("logdna"),
    ];
    // Fields of the job that cannot change after it is created.
    const IMMUTABLE: &'static [&'static str] = &["dataset", "name"];

    /// Decodes a JSON object into the variant for its destination field.
    pub fn decode(value: serde_json::Value) -> std::result::Result<Self, gax::one_of::OneOfError> {
        use gax::one_of::{as_object, decode, reject, select};
        type Object = serde_json::Map<std::string::String, serde_json::Value>;
        let object = as_object(Self::NAME, Self::VARIANTS, &value)?;
        let index = select(Self::NAME, object, Self::VARIANTS)?;
        reject(Self::NAME, object, Self::IMMUTABLE)?;
        let variant = &Self::VARIANTS[index];
        match index {
            0 => decode::<_, Object>(Self::NAME, variant, value).map(Self::Cos),
            1 => decode::<_, std::string::String>(Self::NAME, variant, value).map(Self::Generic),
            2 => decode::<_, LogpushJobIbmclReq>(Self::NAME, variant, value)
                .map(Self::IbmCloudLogs),
            _ => decode::<_, Object>(Self::NAME, variant, value).map(Self::Logdna),
        }
    }

    /// Encodes the variant as a JSON object.
    ///
    /// The object contains the shared fields that are set, and only the
    /// destination fields of this variant.
    pub fn encode(&self) -> std::result::Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl serde::ser::Serialize for UpdateLogpushJobV2Request {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            Self::Cos(v) => v.serialize(serializer),
            Self::Generic(v) => v.serialize(serializer),
            Self::IbmCloudLogs(v) => v.serialize(serializer),
            Self::Logdna(v) => v.serialize(serializer),
        }
    }
}

impl<'de> serde::de::Deserialize<'de> for UpdateLogpushJobV2Request {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::decode(value).map_err(D::Error::custom)
    }
}

impl std::convert::From<UpdateLogpushJobCosV2Request> for UpdateLogpushJobV2Request {
    fn from(value: UpdateLogpushJobCosV2Request) -> Self {
        Self::Cos(value)
    }
}

impl std::convert::From<UpdateLogpushJobGenericV2Request> for UpdateLogpushJobV2Request {
    fn from(value: UpdateLogpushJobGenericV2Request) -> Self {
        Self::Generic(value)
    }
}

impl std::convert::From<UpdateLogpushJobIbmclV2Request> for UpdateLogpushJobV2Request {
    fn from(value: UpdateLogpushJobIbmclV2Request) -> Self {
        Self::IbmCloudLogs(value)
    }
}

impl std::convert::From<UpdateLogpushJobLogdnaV2Request> for UpdateLogpushJobV2Request {
    fn from(value: UpdateLogpushJobLogdnaV2Request) -> Self {
        Self::Logdna(value)
    }
}

/// The request message for [LogpushJobs::get_logpush_jobs_v2][crate::client::LogpushJobs::get_logpush_jobs_v2].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogpushJobsV2Request {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_id: std::string::String,
}

impl GetLogpushJobsV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::GetLogpushJobsV2Request::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_id][crate::model::GetLogpushJobsV2Request::zone_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }
}

/// The request message for [LogpushJobs::create_logpush_job_v2][crate::client::LogpushJobs::create_logpush_job_v2].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateLogpushJobV2Params {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_id: std::string::String,

    /// The job to create.
    pub job: std::option::Option<crate::model::CreateLogpushJobV2Request>,
}

impl CreateLogpushJobV2Params {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::CreateLogpushJobV2Params::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_id][crate::model::CreateLogpushJobV2Params::zone_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [job][crate::model::CreateLogpushJobV2Params::job].
    ///
    /// This is a **required** field for requests.
    pub fn set_job<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CreateLogpushJobV2Request>,
    {
        self.job = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [job][crate::model::CreateLogpushJobV2Params::job].
    pub fn set_or_clear_job<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CreateLogpushJobV2Request>,
    {
        self.job = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogpushJobs::get_logpush_job_v2][crate::client::LogpushJobs::get_logpush_job_v2].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogpushJobV2Request {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_id: std::string::String,

    /// The Logpush job identifier.
    pub job_id: std::string::String,
}

impl GetLogpushJobV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::GetLogpushJobV2Request::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_id][crate::model::GetLogpushJobV2Request::zone_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [job_id][crate::model::GetLogpushJobV2Request::job_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_job_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.job_id = v.into();
        self
    }
}

/// The request message for [LogpushJobs::update_logpush_job_v2][crate::client::LogpushJobs::update_logpush_job_v2].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateLogpushJobV2Params {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_id: std::string::String,

    /// The Logpush job identifier.
    pub job_id: std::string::String,

    /// The new configuration of the job.
    pub job: std::option::Option<crate::model::UpdateLogpushJobV2Request>,
}

impl UpdateLogpushJobV2Params {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::UpdateLogpushJobV2Params::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_id][crate::model::UpdateLogpushJobV2Params::zone_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [job_id][crate::model::UpdateLogpushJobV2Params::job_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_job_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.job_id = v.into();
        self
    }

    /// Sets the value of [job][crate::model::UpdateLogpushJobV2Params::job].
    ///
    /// This is a **required** field for requests.
    pub fn set_job<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UpdateLogpushJobV2Request>,
    {
        self.job = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [job][crate::model::UpdateLogpushJobV2Params::job].
    pub fn set_or_clear_job<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::UpdateLogpushJobV2Request>,
    {
        self.job = v.map(|x| x.into());
        self
    }
}

/// The request message for [LogpushJobs::delete_logpush_job_v2][crate::client::LogpushJobs::delete_logpush_job_v2].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteLogpushJobV2Request {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_id: std::string::String,

    /// The Logpush job identifier.
    pub job_id: std::string::String,
}

impl DeleteLogpushJobV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::DeleteLogpushJobV2Request::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_id][crate::model::DeleteLogpushJobV2Request::zone_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [job_id][crate::model::DeleteLogpushJobV2Request::job_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_job_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.job_id = v.into();
        self
    }
}

/// The request message for [LogpushJobs::list_fields_for_dataset_v2][crate::client::LogpushJobs::list_fields_for_dataset_v2].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListFieldsForDatasetV2Request {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_id: std::string::String,

    /// The dataset, see [dataset][crate::model::dataset] for the known values.
    pub dataset: std::string::String,
}

impl ListFieldsForDatasetV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::ListFieldsForDatasetV2Request::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_id][crate::model::ListFieldsForDatasetV2Request::zone_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [dataset][crate::model::ListFieldsForDatasetV2Request::dataset].
    ///
    /// This is a **required** field for requests.
    pub fn set_dataset<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.dataset = v.into();
        self
    }
}

/// The request message for [LogpushJobs::list_logpush_jobs_for_dataset_v2][crate::client::LogpushJobs::list_logpush_jobs_for_dataset_v2].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLogpushJobsForDatasetV2Request {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_id: std::string::String,

    /// The dataset, see [dataset][crate::model::dataset] for the known values.
    pub dataset: std::string::String,
}

impl ListLogpushJobsForDatasetV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::ListLogpushJobsForDatasetV2Request::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_id][crate::model::ListLogpushJobsForDatasetV2Request::zone_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [dataset][crate::model::ListLogpushJobsForDatasetV2Request::dataset].
    ///
    /// This is a **required** field for requests.
    pub fn set_dataset<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.dataset = v.into();
        self
    }
}

/// The request message for [LogpushJobs::get_logpush_ownership_v2][crate::client::LogpushJobs::get_logpush_ownership_v2].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogpushOwnershipV2Request {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_id: std::string::String,

    /// The Cloud Object Storage bucket configuration.
    pub cos: std::option::Option<serde_json::Map<std::string::String, serde_json::Value>>,
}

impl GetLogpushOwnershipV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::GetLogpushOwnershipV2Request::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_id][crate::model::GetLogpushOwnershipV2Request::zone_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [cos][crate::model::GetLogpushOwnershipV2Request::cos].
    pub fn set_cos<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.cos = std::option::Option::Some(
            v.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        );
        self
    }
}

/// The request message for [LogpushJobs::validate_logpush_ownership_challenge_v2][crate::client::LogpushJobs::validate_logpush_ownership_challenge_v2].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ValidateLogpushOwnershipChallengeV2Request {
    /// The CRN of the CIS instance.
    pub crn: std::string::String,

    /// The zone identifier.
    pub zone_id: std::string::String,

    /// The Cloud Object Storage bucket configuration.
    pub cos: std::option::Option<serde_json::Map<std::string::String, serde_json::Value>>,

    /// The challenge token written to the bucket.
    pub ownership_challenge: std::option::Option<std::string::String>,
}

impl ValidateLogpushOwnershipChallengeV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::ValidateLogpushOwnershipChallengeV2Request::crn].
    ///
    /// This is a **required** field for requests.
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = v.into();
        self
    }

    /// Sets the value of [zone_id][crate::model::ValidateLogpushOwnershipChallengeV2Request::zone_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_zone_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [cos][crate::model::ValidateLogpushOwnershipChallengeV2Request::cos].
    pub fn set_cos<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<serde_json::Value>,
    {
        use std::iter::Iterator;
        self.cos = std::option::Option::Some(
            v.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        );
        self
    }

    /// Sets the value of [ownership_challenge][crate::model::ValidateLogpushOwnershipChallengeV2Request::ownership_challenge].
    pub fn set_ownership_challenge<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ownership_challenge = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ownership_challenge][crate::model::ValidateLogpushOwnershipChallengeV2Request::ownership_challenge].
    pub fn set_or_clear_ownership_challenge<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ownership_challenge = v.map(|x| x.into());
        self
    }
}
