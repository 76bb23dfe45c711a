//! Group administration operations
//!
//! Groups are addressed by JID. The gateway expects the JID either as a
//! query parameter or as a body field depending on the endpoint; each
//! method here mirrors the wire format exactly.

use serde_json::{json, Value};

use crate::transport::EvolutionApi;

/// Group administration façade
#[derive(Clone)]
pub struct GroupService {
    api: EvolutionApi,
}

impl GroupService {
    /// Create a new group service
    #[must_use]
    pub fn new(api: EvolutionApi) -> Self {
        Self { api }
    }

    /// Create a group with a subject and initial participants
    ///
    /// The description is optional and sent as JSON null when absent.
    pub async fn create_group(
        &self,
        instance: &str,
        subject: &str,
        participants: &[&str],
        description: Option<&str>,
    ) -> Value {
        let body = json!({
            "subject": subject,
            "description": description,
            "participants": participants,
        });

        self.api.post(&format!("/group/create/{instance}"), &body).await
    }

    /// Rename a group
    pub async fn update_group_subject(
        &self,
        instance: &str,
        group_jid: &str,
        subject: &str,
    ) -> Value {
        let body = json!({ "subject": subject });

        self.api
            .post(&format!("/group/updateGroupSubject/{instance}?groupJid={group_jid}"), &body)
            .await
    }

    /// Change a group's description
    pub async fn update_group_description(
        &self,
        instance: &str,
        group_jid: &str,
        description: &str,
    ) -> Value {
        let body = json!({ "description": description });

        self.api
            .post(
                &format!("/group/updateGroupDescription/{instance}?groupJid={group_jid}"),
                &body,
            )
            .await
    }

    /// List every group of the instance
    ///
    /// `get_participants` is serialized as the literal strings
    /// `"true"`/`"false"`; the gateway does not accept native booleans
    /// in the query string.
    pub async fn fetch_all_groups(&self, instance: &str, get_participants: bool) -> Value {
        let flag = if get_participants { "true" } else { "false" };

        self.api
            .get(&format!("/group/fetchAllGroups/{instance}"), &[("getParticipants", flag)])
            .await
    }

    /// List the participants of a group
    pub async fn find_participants(&self, instance: &str, group_jid: &str) -> Value {
        self.api
            .get(&format!("/group/participants/{instance}"), &[("groupJid", group_jid)])
            .await
    }

    /// Add, remove, promote, or demote participants
    ///
    /// `action` is passed through unvalidated; the gateway defines the
    /// semantics of unknown actions.
    pub async fn update_participants(
        &self,
        instance: &str,
        group_jid: &str,
        action: &str,
        participants: &[&str],
    ) -> Value {
        let body = json!({
            "action": action,
            "participants": participants,
        });

        self.api
            .post(&format!("/group/updateParticipant/{instance}?groupJid={group_jid}"), &body)
            .await
    }

    /// Leave a group
    pub async fn leave_group(&self, instance: &str, group_jid: &str) -> Value {
        self.api
            .delete(&format!("/group/leaveGroup/{instance}?groupJid={group_jid}"), &json!({}))
            .await
    }

    /// Fetch the group's invite code
    pub async fn fetch_invite_code(&self, instance: &str, group_jid: &str) -> Value {
        self.api
            .get(&format!("/group/inviteCode/{instance}"), &[("groupJid", group_jid)])
            .await
    }

    /// Revoke the group's invite code
    pub async fn revoke_invite_code(&self, instance: &str, group_jid: &str) -> Value {
        let body = json!({ "groupJid": group_jid });

        self.api.post(&format!("/group/revokeInviteCode/{instance}"), &body).await
    }

    /// Send the group's invite URL to a list of numbers
    pub async fn send_invite_url(
        &self,
        instance: &str,
        group_jid: &str,
        description: &str,
        numbers: &[&str],
    ) -> Value {
        let body = json!({
            "groupJid": group_jid,
            "description": description,
            "numbers": numbers,
        });

        self.api.post(&format!("/group/sendInviteUrl/{instance}"), &body).await
    }

    /// Look a group up by invite code
    pub async fn find_group_by_invite_code(&self, instance: &str, invite_code: &str) -> Value {
        self.api
            .get(&format!("/group/findByInviteCode/{instance}"), &[("inviteCode", invite_code)])
            .await
    }

    /// Look a group up by JID
    pub async fn find_group_by_jid(&self, instance: &str, group_jid: &str) -> Value {
        self.api
            .get(&format!("/group/findByJid/{instance}"), &[("groupJid", group_jid)])
            .await
    }

    /// Change group permissions
    ///
    /// The settings value is passed through unvalidated; the gateway
    /// accepts shapes such as `announcement`, `not_announcement`,
    /// `locked`, and `unlocked`.
    pub async fn update_group_setting(
        &self,
        instance: &str,
        group_jid: &str,
        settings: &Value,
    ) -> Value {
        let body = json!({
            "groupJid": group_jid,
            "settings": settings,
        });

        self.api.post(&format!("/group/updateSetting/{instance}"), &body).await
    }

    /// Replace the group picture with the image at `image_url`
    pub async fn update_group_picture(
        &self,
        instance: &str,
        group_jid: &str,
        image_url: &str,
    ) -> Value {
        let body = json!({ "image": image_url });

        self.api
            .post(&format!("/group/updateGroupPicture/{instance}?groupJid={group_jid}"), &body)
            .await
    }
}
