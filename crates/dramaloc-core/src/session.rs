//! 登录会话与角色权限
//!
//! 会话由调用方显式持有并传入，逻辑层不读取任何全局存储。

use serde::{Deserialize, Serialize};

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// 管理员
    Admin,
    /// 项目经理
    ProjectManager,
    /// 译员
    Translator,
    /// 审校
    Reviewer,
}

/// 操作权限
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// 查看成本、绩效、ROI 分析
    ViewAnalytics,
    /// 创建、配置项目
    ManageProjects,
    /// 分配翻译与审校任务
    AssignTasks,
    /// 编辑字幕时间轴
    EditSubtitles,
    /// 质检审核
    ReviewTasks,
    /// 上传视频、字幕、术语表
    UploadMedia,
}

impl Role {
    /// 角色显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "管理员",
            Role::ProjectManager => "项目经理",
            Role::Translator => "译员",
            Role::Reviewer => "审校",
        }
    }

    /// 角色拥有的权限
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::Admin => &[
                Permission::ViewAnalytics,
                Permission::ManageProjects,
                Permission::AssignTasks,
                Permission::EditSubtitles,
                Permission::ReviewTasks,
                Permission::UploadMedia,
            ],
            Role::ProjectManager => &[
                Permission::ViewAnalytics,
                Permission::ManageProjects,
                Permission::AssignTasks,
                Permission::UploadMedia,
            ],
            Role::Translator => &[Permission::ViewAnalytics, Permission::EditSubtitles],
            Role::Reviewer => &[Permission::EditSubtitles, Permission::ReviewTasks],
        }
    }

    pub fn has(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

/// 当前登录会话
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// 用户 ID
    pub user_id: String,
    /// 显示名称（与记录中的 translator 字段一致）
    pub display_name: String,
    /// 角色
    pub role: Role,
}

impl Session {
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            role,
        }
    }

    /// 检查是否拥有某项权限
    pub fn can(&self, permission: Permission) -> bool {
        self.role.has(permission)
    }

    /// 分析数据是否仅限本人
    pub fn is_scoped_to_self(&self) -> bool {
        self.role == Role::Translator
    }
}
