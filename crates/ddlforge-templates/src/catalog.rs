//! Bundled code templates and where their output lands

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::context::TemplateContext;

/// One generated artifact of the scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateKind {
    Vo,
    DefaultVo,
    MapperInterface,
    Mapper,
    Controller,
    Service,
    ServiceImpl,
    JspList,
    JspRegister,
    ThymeleafList,
    ThymeleafRegister,
    Dao,
}

impl TemplateKind {
    /// Every template, in generation order
    pub const ALL: [TemplateKind; 12] = [
        TemplateKind::Vo,
        TemplateKind::DefaultVo,
        TemplateKind::MapperInterface,
        TemplateKind::Mapper,
        TemplateKind::Controller,
        TemplateKind::Service,
        TemplateKind::ServiceImpl,
        TemplateKind::JspList,
        TemplateKind::JspRegister,
        TemplateKind::ThymeleafList,
        TemplateKind::ThymeleafRegister,
        TemplateKind::Dao,
    ];

    /// Key used for previews and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            TemplateKind::Vo => "vo",
            TemplateKind::DefaultVo => "defaultVo",
            TemplateKind::MapperInterface => "mapperInterface",
            TemplateKind::Mapper => "mapper",
            TemplateKind::Controller => "controller",
            TemplateKind::Service => "service",
            TemplateKind::ServiceImpl => "serviceImpl",
            TemplateKind::JspList => "jspList",
            TemplateKind::JspRegister => "jspRegister",
            TemplateKind::ThymeleafList => "thymeleafList",
            TemplateKind::ThymeleafRegister => "thymeleafRegister",
            TemplateKind::Dao => "dao",
        }
    }

    /// Parses a template key (case-insensitive)
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(key))
    }

    /// Template name inside the engine, also the file name looked up in an
    /// override directory
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateKind::Vo => "vo.java.jinja",
            TemplateKind::DefaultVo => "default_vo.java.jinja",
            TemplateKind::MapperInterface => "mapper_interface.java.jinja",
            TemplateKind::Mapper => "mapper.xml.jinja",
            TemplateKind::Controller => "controller.java.jinja",
            TemplateKind::Service => "service.java.jinja",
            TemplateKind::ServiceImpl => "service_impl.java.jinja",
            TemplateKind::JspList => "jsp_list.jsp.jinja",
            TemplateKind::JspRegister => "jsp_register.jsp.jinja",
            TemplateKind::ThymeleafList => "thymeleaf_list.html.jinja",
            TemplateKind::ThymeleafRegister => "thymeleaf_register.html.jinja",
            TemplateKind::Dao => "dao.java.jinja",
        }
    }

    pub(crate) fn bundled_source(&self) -> &'static str {
        match self {
            TemplateKind::Vo => include_str!("../templates/vo.java.jinja"),
            TemplateKind::DefaultVo => include_str!("../templates/default_vo.java.jinja"),
            TemplateKind::MapperInterface => {
                include_str!("../templates/mapper_interface.java.jinja")
            }
            TemplateKind::Mapper => include_str!("../templates/mapper.xml.jinja"),
            TemplateKind::Controller => include_str!("../templates/controller.java.jinja"),
            TemplateKind::Service => include_str!("../templates/service.java.jinja"),
            TemplateKind::ServiceImpl => include_str!("../templates/service_impl.java.jinja"),
            TemplateKind::JspList => include_str!("../templates/jsp_list.jsp.jinja"),
            TemplateKind::JspRegister => include_str!("../templates/jsp_register.jsp.jinja"),
            TemplateKind::ThymeleafList => include_str!("../templates/thymeleaf_list.html.jinja"),
            TemplateKind::ThymeleafRegister => {
                include_str!("../templates/thymeleaf_register.html.jinja")
            }
            TemplateKind::Dao => include_str!("../templates/dao.java.jinja"),
        }
    }

    /// Path of the generated file relative to the project root
    pub fn output_path(&self, ctx: &TemplateContext) -> PathBuf {
        let java = format!("src/main/java/{}", ctx.package_path);
        let class = ctx.class_name.as_str();
        let view_dir = ctx.view_dir();

        let path = match self {
            TemplateKind::Vo => format!("{java}/service/{class}VO.java"),
            TemplateKind::DefaultVo => format!("{java}/service/DefaultVO.java"),
            TemplateKind::MapperInterface => format!("{java}/service/impl/{class}Mapper.java"),
            TemplateKind::Mapper => {
                format!("src/main/resources/egovframework/mapper/{class}_SQL.xml")
            }
            TemplateKind::Controller => format!("{java}/web/{class}Controller.java"),
            TemplateKind::Service => format!("{java}/service/{class}Service.java"),
            TemplateKind::ServiceImpl => format!("{java}/service/impl/{class}ServiceImpl.java"),
            TemplateKind::JspList => format!(
                "src/main/webapp/WEB-INF/jsp/egovframework/example/{view_dir}/{class}List.jsp"
            ),
            TemplateKind::JspRegister => format!(
                "src/main/webapp/WEB-INF/jsp/egovframework/example/{view_dir}/{class}Regist.jsp"
            ),
            TemplateKind::ThymeleafList => {
                format!("src/main/resources/templates/{view_dir}/{class}List.html")
            }
            TemplateKind::ThymeleafRegister => {
                format!("src/main/resources/templates/{view_dir}/{class}Regist.html")
            }
            TemplateKind::Dao => format!("{java}/service/impl/{class}DAO.java"),
        };

        PathBuf::from(path)
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
