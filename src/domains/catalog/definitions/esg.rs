//! ESG (sustainability management) documentation.

use super::{NamespaceDefinition, TopicDefinition};
use crate::domains::catalog::identifier::Namespace;

/// ESG namespace definition.
pub struct EsgDocs;

impl NamespaceDefinition for EsgDocs {
    const NAMESPACE: Namespace = Namespace::Esg;
    const NOT_FOUND: &'static str = "ESG 프로젝트 정보를 찾을 수 없습니다.";

    fn topics() -> Vec<TopicDefinition> {
        vec![
            TopicDefinition {
                topic: "overview",
                title: "ESG 프로젝트 개요",
                description: "지속가능성 관리 - Falcon UI + Bootstrap",
                tool_name: "get_esg_overview",
                template: OVERVIEW,
            },
            TopicDefinition {
                topic: "features",
                title: "ESG 특화 기능",
                description: "Dashboard, Chart Widgets, KPI Cards, Form Wizards",
                tool_name: "get_esg_features",
                template: FEATURES,
            },
            TopicDefinition {
                topic: "frameworks",
                title: "ESG 프레임워크",
                description: "GRI, SASB, TCFD, CDP 준수",
                tool_name: "get_esg_frameworks",
                template: FRAMEWORKS,
            },
            TopicDefinition {
                topic: "swagger",
                title: "ESG Swagger API",
                description: "ESG API 스키마 및 엔드포인트",
                tool_name: "get_esg_swagger",
                template: SWAGGER,
            },
        ]
    }
}

const OVERVIEW: &str = r#"# 🌱 ESG 프로젝트 개요

## 📋 **프로젝트 설명**
ESG는 지속가능성 관리 시스템으로, 환경(Environmental), 사회(Social), 지배구조(Governance) 데이터를 통합 관리하는 대시보드 중심의 웹 애플리케이션입니다.

## 🏗️ **기술 스택**
- **Frontend**: React 18 + TypeScript
- **UI Framework**: Falcon UI + Bootstrap + Material-UI
- **Charts**: Recharts (ESG 데이터 시각화 최적화)
- **State Management**: React Query
- **Build Tool**: Vite

## 📊 **현재 상태**
- **완성도**: 🟡 85%
- **주요 기능**: 대시보드, 데이터 수집, 리포트 생성
- **특화 영역**: ESG 프레임워크 준수 (GRI, SASB, TCFD, CDP)

## 🎯 **주요 특징**
- **Dashboard Templates**: ESG 메트릭 대시보드 with KPI cards
- **Chart Widgets**: 시계열, 막대, 영역, 파이 차트
- **KPI Cards**: 탄소 배출량, 에너지 사용량, 물 사용량, 폐기물
- **Form Wizards**: 다단계 데이터 입력 with 검증
"#;

const FEATURES: &str = r#"# 🎯 ESG 특화 기능

## 📊 **Dashboard Templates**
- **DashboardPage**: ESG 메트릭 대시보드 with KPI cards
- **ReportPage**: ESG 리포트 빌더 (GRI, SASB, TCFD 템플릿)
- **CollectPage**: 데이터 수집 with 검증
- **GroupGridPage**: 그룹 네비게이션 + 데이터 그리드 레이아웃

## 📈 **Chart Widgets**
- **Line Charts**: 시계열 ESG 데이터 (배출량, 에너지 사용량)
- **Bar Charts**: 카테고리별 비교 (Scope 1/2/3 배출량)
- **Area Charts**: 누적 데이터 표시
- **Pie Charts**: 구성 비율 (에너지원별, 폐기물 유형별)

## 📋 **KPI Cards**
- **탄소 배출량**: tCO2e 단위, 목표 대비 진행률
- **에너지 사용량**: MWh 단위, 재생에너지 비율
- **물 사용량**: 톤 단위, 재활용률
- **폐기물**: 톤 단위, 재활용률 및 매립률

## 📝 **Form Wizards**
- **다단계 데이터 입력**: 기본 정보 → 환경 데이터 → 검토
- **프레임워크 준수**: GRI, SASB, TCFD 표준 자동 적용
- **데이터 품질 관리**: 정확도, 검증 상태 추적
"#;

const FRAMEWORKS: &str = r#"# 📋 ESG 프레임워크

## 🌍 **GRI (Global Reporting Initiative)**
- **목적**: 지속가능성 보고 표준
- **범위**: 경제, 환경, 사회 영향
- **적용**: ESG 데이터 수집 및 보고 체계

## 📊 **SASB (Sustainability Accounting Standards Board)**
- **목적**: 재무적 중요성 ESG 이슈
- **범위**: 77개 산업별 표준
- **적용**: 투자자 의사결정 지원

## 🌡️ **TCFD (Task Force on Climate-related Financial Disclosures)**
- **목적**: 기후 관련 재무 정보 공개
- **범위**: 거버넌스, 전략, 리스크 관리, 지표 및 목표
- **적용**: 기후 리스크 평가 및 관리

## 📈 **CDP (Carbon Disclosure Project)**
- **목적**: 탄소 배출량 및 기후 변화 정보 공개
- **범위**: Scope 1, 2, 3 배출량
- **적용**: 탄소 관리 및 감축 목표 설정
"#;

const SWAGGER: &str = r#"# 🔍 ESG Swagger API 정보

## 📊 **실제 Swagger URL**

### **🌱 ESG API**
- **URL**: {{esg}}
- **용도**: ESG 데이터 수집, 분석, 리포트 생성
- **주요 API**: CarbonEmission, EnergyUsage, WaterUsage, WasteManagement

## 🚀 **사용법**

### **1. 환경변수 설정**
```bash
export SWAGGER_URL_ESG={{esg}}
```

### **2. 직접 API 호출**
```bash
# ESG API 스키마 확인
curl {{esg}}
```

### **3. 코드 생성 시 활용**
- **Swagger 분석**: ESG API 스키마 자동 분석
- **타입 생성**: ESG 데이터 구조 기반 TypeScript 타입 자동 생성
- **서비스 생성**: ESG API 엔드포인트 기반 서비스 레이어 자동 생성
- **검증 스키마**: ESG 데이터 요청/응답 기반 Zod 검증 스키마 자동 생성

## 📋 **주요 ESG API 모듈**

### **🌡️ 배출량 관리 (Emission Management)**
- **EmissionFactor**: 배출계수 관리 (category, gasType, coefficientValue, unit)
- **EmissionFactorHead**: 배출계수 헤더 (title, applyYm, publishedBy)
- **DataType**: GHG Scope별 배출원 분류 (Scope 1/2/3, emissionSource, category, uom)
- **EmissionDashboard**: 월별/스코프별 배출량 대시보드

### **📊 데이터 수집 (Data Collection)**
- **Record**: 실제 사용량/배출량 데이터 (accountMonth, quantity, totalCost)
- **RecordMatrix**: 월별 매트릭스 형태 데이터 입력 (12개월 데이터)
- **Account**: 계정 관리 (name, supplier, accountStyle, meter, company, charger)
- **Meter**: 계량기 관리 (name, serialNo, servicePoint, component)

### **🏢 조직 관리 (Organization Management)**
- **Company**: 회사 정보 (name, license, companyType, businessType, address)
- **Group**: 그룹 구조 (groupName, type, parentId, reportPercent, isOpenToPublic)
- **Location**: 위치 정보 (country, state, city, emissionFactorHead)
- **Charger**: 담당자 관리 (name, department, grade, phone, address)

### **📈 대시보드 & 분석 (Dashboard & Analytics)**
- **UsageDashboard**: 월별/스코프별 사용량 대시보드
- **YearlyEmissionTrend**: 연도별 배출량 추이 (actualEmission, targetEmission, achievementRate)
- **GroupEmissionTree**: 그룹별 배출량 트리 구조
- **CompanyEmission/Usage**: 회사별 월별 배출량/사용량 분석

### **📝 리포트 & 설문 (Report & Survey)**
- **Report**: ESG 리포트 생성 (title, titleImage, description)
- **ReportTab**: 리포트 탭 구조 (tabOrder, name)
- **Survey**: ESG 설문조사 관리
- **Question/Answer**: 질문/답변 시스템 (reportTypeId, name)

### **🔧 시스템 관리 (System Management)**
- **AccountStyle**: 계정 스타일 (dataType, caption, categoryInScope)
- **CustomFormula**: 사용자 정의 공식 (operator, operand)
- **Code/CodeGroup**: 코드 관리 시스템
- **AuditLog**: 감사 로그 (userId, action, changedData, ipAddress)
"#;
